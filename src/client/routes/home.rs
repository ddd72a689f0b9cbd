use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaUsers;
use dioxus_free_icons::Icon;
use nu_housing::config::Config;

use crate::client::{app::SessionState, components::Page};

#[component]
fn EntryButton() -> Element {
    let state = use_context::<Signal<SessionState>>();
    let config = use_context::<Config>();

    let session = state.read().stored.resolve();

    rsx!(
        if let Some(session) = session {
            Link {
                to: session.role().dashboard_path(),
                class: "btn btn-primary w-48",
                "Go to Dashboard"
            }
        } else if state.read().fetched {
            Link {
                to: config.login_path.clone(),
                class: "btn btn-primary w-48",
                "Login"
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "NU Housing Portal" }
        Meta {
            name: "description",
            content: "Apply for university housing and follow the review of your application."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 max-w-256",
                Icon { width: 48, height: 48, icon: FaUsers }
                h1 { class: "text-3xl font-bold", "NU Housing Portal" }
                p { class: "text-center",
                    "Students apply for on-campus housing here. Housing staff review every application and you can follow its status from your dashboard."
                }
                EntryButton {}
            }
        }
    )
}
