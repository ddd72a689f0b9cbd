use dioxus::prelude::*;

#[component]
pub fn StatCardView(label: String, value: String, class: Option<&'static str>) -> Element {
    let class = class.unwrap_or_default();

    rsx!(
        div { class: "card shadow-sm bg-base-100 {class}",
            div { class: "card-body items-center",
                p { class: "text-sm opacity-70", "{label}" }
                p { class: "text-3xl font-bold", "{value}" }
            }
        }
    )
}
