use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaClipboardList;
use dioxus_free_icons::Icon;
use nu_housing::model::application::{ApplicationDraft, ApplicationForm};

/// Result of the last submission, shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitNotice {
    Submitted,
    Failed(String),
}

#[component]
pub fn ApplicationFormCard(
    mut form: Signal<ApplicationForm>,
    mut notice: Signal<Option<SubmitNotice>>,
    submitting: bool,
    on_submit: EventHandler<ApplicationDraft>,
) -> Element {
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let draft = ApplicationDraft::from_form(&form.read());
        match draft {
            Ok(draft) => on_submit.call(draft),
            Err(e) => notice.set(Some(SubmitNotice::Failed(e.to_string()))),
        }
    };

    rsx!(
        div {
            class: "card shadow-sm w-full max-w-196",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    Icon { width: 20, height: 20, icon: FaClipboardList }
                    "Housing Application"
                }
                form { class: "flex flex-col gap-3", onsubmit,
                    label { class: "form-control",
                        span { class: "label-text", "Year of study" }
                        input {
                            class: "input input-bordered",
                            r#type: "number",
                            min: "1",
                            required: true,
                            value: form.read().year.clone(),
                            oninput: move |evt| form.write().year = evt.value(),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Major" }
                        input {
                            class: "input input-bordered",
                            required: true,
                            value: form.read().major.clone(),
                            oninput: move |evt| form.write().major = evt.value(),
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Gender" }
                        select {
                            class: "select select-bordered",
                            value: form.read().gender.clone(),
                            onchange: move |evt| form.write().gender = evt.value(),
                            option { value: "", "Select gender" }
                            option { value: "Male", "Male" }
                            option { value: "Female", "Female" }
                            option { value: "Other", "Other" }
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Room preference" }
                        select {
                            class: "select select-bordered",
                            value: form.read().room_preference.clone(),
                            onchange: move |evt| form.write().room_preference = evt.value(),
                            option { value: "", "No preference" }
                            option { value: "Single", "Single" }
                            option { value: "Double", "Double" }
                            option { value: "Triple", "Triple" }
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Additional information" }
                        textarea {
                            class: "textarea textarea-bordered",
                            value: form.read().additional_info.clone(),
                            oninput: move |evt| form.write().additional_info = evt.value(),
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting { "Submitting..." } else { "Submit Application" }
                    }
                }
                {match notice() {
                    Some(SubmitNotice::Submitted) => rsx!(
                        div { class: "alert alert-success", "Application Submitted!" }
                    ),
                    Some(SubmitNotice::Failed(message)) => rsx!(
                        div { class: "alert alert-error", "{message}" }
                    ),
                    None => rsx!(),
                }}
            }
        }
    )
}
