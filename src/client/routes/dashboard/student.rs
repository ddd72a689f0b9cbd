use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus::router::Navigator;
use dioxus_logger::tracing;
use nu_housing::{
    config::Config,
    model::{
        application::{ApplicationDraft, ApplicationForm},
        user::Role,
    },
    projection::{format_timestamp, MyApplications, StatusBadge},
    remote::{Loadable, SlotKind},
    repository::ApplicationRepository,
    session::Session,
};

use crate::client::{
    components::{
        ApplicationFormCard, ApplicationsTable, Badge, ErrorPanel, Loading, Page, SubmitNotice,
    },
    util::{
        api::{portal_client, PortalClient},
        session::{redirect_if_signed_out, use_session_gate},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StudentTab {
    Submit,
    Applications,
}

#[component]
pub fn StudentDashboard() -> Element {
    let session = use_session_gate(Role::Student);

    rsx!(
        Title { "Student Dashboard | NU Housing Portal" }
        Page { class: "flex flex-col items-center",
            if let Some(session) = session {
                StudentPanels { session }
            } else {
                Loading { label: "Checking session..." }
            }
        }
    )
}

async fn load_applications(
    client: PortalClient,
    mut view: Signal<MyApplications>,
    config: Config,
    navigator: Navigator,
) {
    // A submit landing mid-load asks for one more pass
    loop {
        if !view.write().resource_mut().begin_fetch() {
            return;
        }

        let result = ApplicationRepository::new(&client).list_mine().await;
        if let Err(err) = &result {
            redirect_if_signed_out(err, &config, navigator);
        }

        if !view.write().resource_mut().finish_fetch(result) {
            return;
        }
    }
}

#[component]
fn StudentPanels(session: Session) -> Element {
    let config = use_context::<Config>();
    let navigator = use_navigator();
    let client = use_hook(|| portal_client(&config, &session));

    let mut tab = use_signal(|| StudentTab::Submit);
    let view = use_signal(MyApplications::new);
    let mut form = use_signal(ApplicationForm::default);
    let mut notice = use_signal(|| None::<SubmitNotice>);

    let load = use_callback({
        let client = client.clone();
        let config = config.clone();
        move |_: ()| {
            spawn(load_applications(client.clone(), view, config.clone(), navigator));
        }
    });

    use_hook(|| load.call(()));

    let submit = {
        let client = client.clone();
        let config = config.clone();
        move |draft: ApplicationDraft| {
            let client = client.clone();
            let config = config.clone();
            let mut view = view;

            spawn(async move {
                if !view.write().resource_mut().begin(SlotKind::Submit) {
                    return;
                }
                notice.set(None);

                let result = ApplicationRepository::new(&client).submit(&draft).await;
                let result = view.write().resource_mut().finish(SlotKind::Submit, result);

                match result {
                    Ok(id) => {
                        tracing::info!("Submitted application {}", id);
                        notice.set(Some(SubmitNotice::Submitted));
                        form.set(ApplicationForm::default());
                        load_applications(client, view, config, navigator).await;
                    }
                    Err(err) => {
                        redirect_if_signed_out(&err, &config, navigator);
                        notice.set(Some(SubmitNotice::Failed(err.user_message())));
                    }
                }
            });
        }
    };

    let current = view.read();
    let submitting = current.resource().is_busy(SlotKind::Submit);
    let greeting = session
        .user
        .name
        .clone()
        .unwrap_or_else(|| "Student".to_string());

    rsx!(
        div { class: "w-full max-w-[1440px] p-6 flex flex-col items-center gap-4",
            h1 { class: "text-2xl font-bold", "Welcome, {greeting}" }
            div { role: "tablist", class: "tabs tabs-boxed",
                button {
                    role: "tab",
                    class: if tab() == StudentTab::Submit { "tab tab-active" } else { "tab" },
                    onclick: move |_| tab.set(StudentTab::Submit),
                    "Submit Application"
                }
                button {
                    role: "tab",
                    class: if tab() == StudentTab::Applications { "tab tab-active" } else { "tab" },
                    onclick: move |_| tab.set(StudentTab::Applications),
                    "My Applications"
                }
            }
            {match tab() {
                StudentTab::Submit => rsx!(
                    StatusCard { view }
                    ApplicationFormCard {
                        form,
                        notice,
                        submitting,
                        on_submit: submit,
                    }
                ),
                StudentTab::Applications => rsx!(
                    div { class: "card shadow-sm w-full max-w-196",
                        div { class: "card-body",
                            h2 { class: "card-title", {current.heading()} }
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
                                    ApplicationsTable { rows: current.rows() }
                                ),
                            }}
                        }
                    }
                ),
            }}
        }
    )
}

/// Status of the most recent application, if any.
#[component]
fn StatusCard(view: Signal<MyApplications>) -> Element {
    let view = view.read();

    rsx!(
        div { class: "card shadow-sm w-full max-w-196",
            div { class: "card-body",
                h2 { class: "card-title", "Application Status" }
                if let Some(latest) = view.latest() {
                    div { class: "flex items-center gap-2",
                        Badge { badge: StatusBadge::from(latest.status) }
                        p { "{latest.major}, submitted " {format_timestamp(&latest.submitted_at)} }
                    }
                } else if view.resource().is_loading() {
                    Loading { label: "Loading status..." }
                } else {
                    p { class: "opacity-70", "No application submitted yet." }
                }
            }
        }
    )
}
