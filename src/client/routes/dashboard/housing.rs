use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus::router::Navigator;
use dioxus_logger::tracing;
use nu_housing::{
    config::Config,
    model::{application::ApplicationId, user::Role},
    projection::{staff_queue::review_slot, StaffQueue},
    remote::{Loadable, SlotKind},
    repository::{ApplicationRepository, StatusFilter},
    session::Session,
    workflow::ReviewAction,
};

use crate::client::{
    components::{ErrorPanel, HousingTable, Loading, Page, StatCardView},
    util::{
        api::{portal_client, PortalClient},
        session::{redirect_if_signed_out, use_session_gate},
    },
};

#[component]
pub fn HousingDashboard() -> Element {
    let session = use_session_gate(Role::Housing);

    rsx!(
        Title { "Housing Dashboard | NU Housing Portal" }
        Page { class: "flex flex-col items-center",
            if let Some(session) = session {
                StaffPanels { session }
            } else {
                Loading { label: "Checking session..." }
            }
        }
    )
}

async fn load_queue(
    client: PortalClient,
    mut queue: Signal<StaffQueue>,
    config: Config,
    navigator: Navigator,
) {
    // A review landing mid-load asks for one more pass
    loop {
        if !queue.write().resource_mut().begin_fetch() {
            return;
        }

        let result = ApplicationRepository::new(&client)
            .list_all(StatusFilter::All)
            .await;
        if let Err(err) = &result {
            redirect_if_signed_out(err, &config, navigator);
        }

        if !queue.write().resource_mut().finish_fetch(result) {
            return;
        }
    }
}

async fn review(
    client: PortalClient,
    mut queue: Signal<StaffQueue>,
    mut notice: Signal<Option<String>>,
    config: Config,
    navigator: Navigator,
    id: ApplicationId,
    action: ReviewAction,
) {
    let checked = queue.read().check(id, &action);
    if let Err(err) = checked {
        notice.set(Some(err.user_message()));
        return;
    }

    let slot = review_slot(&action);
    if !queue.write().resource_mut().begin(slot) {
        return;
    }
    notice.set(None);

    let result = ApplicationRepository::new(&client).review(id, &action).await;
    let result = queue.write().resource_mut().finish(slot, result);

    match result {
        Ok(()) => {
            tracing::info!("Application {} reviewed: {}", id, action.kind().label());
            load_queue(client, queue, config, navigator).await;
        }
        Err(err) => {
            redirect_if_signed_out(&err, &config, navigator);
            notice.set(Some(err.user_message()));
        }
    }
}

#[component]
fn StaffPanels(session: Session) -> Element {
    let config = use_context::<Config>();
    let navigator = use_navigator();
    let client = use_hook(|| portal_client(&config, &session));

    let mut queue = use_signal(|| StaffQueue::new(session.role()));
    let notice = use_signal(|| None::<String>);

    let load = use_callback({
        let client = client.clone();
        let config = config.clone();
        move |_: ()| {
            spawn(load_queue(client.clone(), queue, config.clone(), navigator));
        }
    });

    use_hook(|| load.call(()));

    let on_review = {
        let client = client.clone();
        let config = config.clone();
        move |(id, action): (ApplicationId, ReviewAction)| {
            spawn(review(
                client.clone(),
                queue,
                notice,
                config.clone(),
                navigator,
                id,
                action,
            ));
        }
    };

    let current = queue.read();
    let counts = current.counts();
    let approving = current.resource().is_busy(SlotKind::Approve);
    let rejecting = current.resource().is_busy(SlotKind::Reject);

    rsx!(
        div { class: "w-full max-w-[1440px] p-6 flex flex-col gap-4",
            h1 { class: "text-2xl font-bold", "Housing Dashboard" }
            div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                StatCardView { label: "Total", value: counts.total.to_string() }
                StatCardView { label: "Pending", value: counts.pending.to_string(), class: "text-warning" }
                StatCardView { label: "Approved", value: counts.approved.to_string(), class: "text-success" }
                StatCardView { label: "Rejected", value: counts.rejected.to_string(), class: "text-error" }
            }
            if let Some(message) = notice() {
                div { class: "alert alert-error", "{message}" }
            }
            {match current.resource().state() {
                Loadable::Idle | Loadable::Loading => rsx!(Loading { label: "Loading applications..." }),
                Loadable::Failed(err) => rsx!(ErrorPanel {
                    error: err,
                    prefix: "Failed to load applications.",
                    on_retry: move |_| load.call(()),
                }),
                Loadable::Ready(_) => rsx!(
                    if let Some(err) = current.resource().load_error() {
                        ErrorPanel {
                            error: err.clone(),
                            on_retry: move |_| load.call(()),
                        }
                    }
                    HousingTable {
                        heading: current.heading(),
                        rows: current.rows(),
                        filter: current.filter(),
                        on_filter: move |filter| queue.write().set_filter(filter),
                        on_review,
                        approving,
                        rejecting,
                    }
                ),
            }}
        }
    )
}
