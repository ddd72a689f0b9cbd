use dioxus::prelude::*;
use nu_housing::{
    model::application::ApplicationId,
    projection::{
        staff_queue::{NO_APPLICATIONS, REVIEWED_LABEL},
        StaffQueueRow,
    },
    repository::StatusFilter,
    workflow::{RejectionReason, ReviewAction, ReviewActionKind},
};

use crate::client::components::Badge;

#[component]
pub fn HousingTable(
    heading: String,
    rows: Vec<StaffQueueRow>,
    filter: StatusFilter,
    on_filter: EventHandler<StatusFilter>,
    on_review: EventHandler<(ApplicationId, ReviewAction)>,
    approving: bool,
    rejecting: bool,
) -> Element {
    rsx!(
        div { class: "flex items-center justify-between p-2",
            h2 { class: "text-lg font-semibold", "{heading}" }
            select {
                class: "select select-bordered w-48",
                value: "{filter}",
                onchange: move |evt| on_filter.call(StatusFilter::parse(&evt.value())),
                for option in StatusFilter::OPTIONS {
                    option {
                        value: option.value(),
                        selected: option == filter,
                        {option.label()}
                    }
                }
            }
        }
        if rows.is_empty() {
            p { class: "p-4 opacity-70", "{NO_APPLICATIONS}" }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-md",
                    thead {
                        tr {
                            th { "Student" }
                            th { "Year" }
                            th { "Major" }
                            th { "Room Preference" }
                            th { "Status" }
                            th { "Submitted" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for row in rows {
                            HousingRow {
                                key: "{row.id}",
                                row: row.clone(),
                                on_review,
                                approving,
                                rejecting,
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn HousingRow(
    row: StaffQueueRow,
    on_review: EventHandler<(ApplicationId, ReviewAction)>,
    approving: bool,
    rejecting: bool,
) -> Element {
    let mut reason = use_signal(String::new);
    let mut reason_error = use_signal(|| None::<String>);
    let id = row.id;

    let submit_rejection = move |_: MouseEvent| {
        let input = reason.read().clone();
        match RejectionReason::new(&input) {
            Ok(valid) => {
                reason_error.set(None);
                reason.set(String::new());
                on_review.call((id, ReviewAction::Reject(valid)));
            }
            Err(e) => reason_error.set(Some(e.to_string())),
        }
    };

    rsx!(
        tr {
            td {
                div { class: "flex flex-col",
                    p { class: "font-semibold", "{row.student}" }
                    if let Some(name) = row.student_name.as_ref() {
                        p { class: "text-sm", "{name}" }
                    }
                    if let Some(email) = row.email.as_ref() {
                        p { class: "text-xs opacity-70", "{email}" }
                    }
                }
            }
            td { "{row.year}" }
            td { "{row.major}" }
            td { "{row.room_preference}" }
            td { Badge { badge: row.badge } }
            td { "{row.submitted}" }
            td {
                if row.is_reviewed() {
                    span { class: "opacity-70", "{REVIEWED_LABEL}" }
                } else {
                    div { class: "flex flex-col gap-2",
                        for action in row.actions.iter().copied() {
                            if action == ReviewActionKind::Approve {
                                button {
                                    class: "btn btn-sm btn-success",
                                    disabled: approving,
                                    onclick: move |_| on_review.call((id, ReviewAction::Approve)),
                                    {action.label()}
                                }
                            } else {
                                div { class: "flex gap-2",
                                    input {
                                        class: "input input-sm input-bordered",
                                        placeholder: "Reason for rejection",
                                        value: "{reason}",
                                        oninput: move |evt| reason.set(evt.value()),
                                    }
                                    button {
                                        class: "btn btn-sm btn-error",
                                        disabled: rejecting,
                                        onclick: submit_rejection,
                                        {action.label()}
                                    }
                                }
                            }
                        }
                        if let Some(message) = reason_error() {
                            p { class: "text-xs text-error", "{message}" }
                        }
                    }
                }
            }
        }
    )
}
