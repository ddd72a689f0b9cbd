use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::Page;

/// Login entry point. Signing in is handled by the university's authentication service, which
/// stores the session and sends the user back to their dashboard.
#[component]
pub fn Login() -> Element {
    rsx!(
        Title { "Login | NU Housing Portal" }
        Page { class: "flex items-center justify-center",
            div {
                class: "card shadow-sm w-full max-w-96",
                div {
                    class: "card-body",
                    h2 { class: "card-title", "Please log in first" }
                    p {
                        "Sign in with your university account to submit or review housing applications."
                    }
                }
            }
        }
    )
}
