use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus::router::Navigator;
use nu_housing::{
    config::Config,
    model::user::Role,
    projection::{admin_stats::STATS_UNAVAILABLE, AdminStatsView},
    repository::ApplicationRepository,
    session::Session,
};

use crate::client::{
    components::{ErrorPanel, Loading, Page, StatCardView},
    util::{
        api::{portal_client, PortalClient},
        session::{redirect_if_signed_out, use_session_gate},
    },
};

#[component]
pub fn AdminDashboard() -> Element {
    let session = use_session_gate(Role::Admin);

    rsx!(
        Title { "Admin Dashboard | NU Housing Portal" }
        Page { class: "flex flex-col items-center",
            if let Some(session) = session {
                AdminPanels { session }
            } else {
                Loading { label: "Checking session..." }
            }
        }
    )
}

async fn load_stats(
    client: PortalClient,
    mut view: Signal<AdminStatsView>,
    config: Config,
    navigator: Navigator,
) {
    if !view.write().resource_mut().begin_fetch() {
        return;
    }

    let result = ApplicationRepository::new(&client).admin_stats().await;
    if let Err(err) = &result {
        redirect_if_signed_out(err, &config, navigator);
    }

    view.write().resource_mut().finish_fetch(result);
}

#[component]
fn AdminPanels(session: Session) -> Element {
    let config = use_context::<Config>();
    let navigator = use_navigator();
    let client = use_hook(|| portal_client(&config, &session));
    let view = use_signal(AdminStatsView::new);

    let load = use_callback(move |_: ()| {
        spawn(load_stats(client.clone(), view, config.clone(), navigator));
    });

    use_hook(|| load.call(()));

    let current = view.read();

    rsx!(
        div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
            h1 { class: "text-2xl font-bold", "Administration" }
            if let Some(cards) = current.cards() {
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                    for card in cards {
                        StatCardView { label: "{card.label}", value: card.value.to_string() }
                    }
                }
            } else if current.is_unavailable() {
                p { class: "opacity-70", "{STATS_UNAVAILABLE}" }
                if let Some(err) = current.resource().load_error() {
                    ErrorPanel {
                        error: err.clone(),
                        on_retry: move |_| load.call(()),
                    }
                }
            } else {
                Loading { label: "Loading stats..." }
            }
        }
    )
}
