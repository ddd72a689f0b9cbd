use dioxus::prelude::*;
use nu_housing::error::ApiError;

#[component]
pub fn Loading(label: String) -> Element {
    rsx!(
        div { class: "flex items-center gap-2 p-4",
            span { class: "loading loading-spinner" }
            p { "{label}" }
        }
    )
}

/// Inline failure message, with a retry button for errors a re-click could fix.
#[component]
pub fn ErrorPanel(
    error: ApiError,
    prefix: Option<&'static str>,
    on_retry: EventHandler<()>,
) -> Element {
    let message = match prefix {
        Some(prefix) => format!("{} {}", prefix, error.user_message()),
        None => error.user_message(),
    };

    rsx!(
        div { class: "alert alert-error flex justify-between",
            p { "{message}" }
            if error.is_retryable() {
                button {
                    class: "btn btn-sm",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    )
}
