use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { class: "flex flex-col items-center justify-center gap-4",
            p { class: "text-xl", "Page not found: /{path}" }
            Link { to: Route::Home {}, class: "btn btn-outline", "Back to home" }
        }
    )
}
