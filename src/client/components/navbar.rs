use dioxus::prelude::*;
use nu_housing::config::Config;

use crate::client::{app::SessionState, router::Route};

#[component]
pub fn Navbar() -> Element {
    let state = use_context::<Signal<SessionState>>();
    let config = use_context::<Config>();

    let session = state.read().stored.resolve();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                Link {
                    to: Route::Home {},
                    p { class: "text-xl", "NU Housing Portal" }
                }
            }
            div {
                class: "navbar-end",
                if let Some(session) = session {
                    div { class: "flex items-center gap-4",
                        if let Some(name) = session.user.name.as_ref() {
                            p { class: "text-sm", "{name}" }
                        }
                        Link {
                            to: session.role().dashboard_path(),
                            class: "btn btn-outline",
                            "Dashboard"
                        }
                    }
                } else if state.read().fetched {
                    Link {
                        to: config.login_path.clone(),
                        class: "btn btn-primary",
                        "Login"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
