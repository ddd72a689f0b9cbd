use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCheck, FaHourglass, FaXmark};
use dioxus_free_icons::Icon;
use nu_housing::projection::{BadgeColor, StatusBadge};

#[component]
pub fn Badge(badge: StatusBadge) -> Element {
    let class = badge.color.class();

    rsx!(
        span { class: "badge gap-1 {class}",
            {match badge.color {
                BadgeColor::Amber => rsx!(Icon { width: 12, height: 12, icon: FaHourglass }),
                BadgeColor::Green => rsx!(Icon { width: 12, height: 12, icon: FaCheck }),
                BadgeColor::Red => rsx!(Icon { width: 12, height: 12, icon: FaXmark }),
            }}
            "{badge.label}"
        }
    )
}
