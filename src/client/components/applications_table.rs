use dioxus::prelude::*;
use nu_housing::projection::MyApplicationRow;

use crate::client::components::Badge;

#[component]
pub fn ApplicationsTable(rows: Vec<MyApplicationRow>) -> Element {
    if rows.is_empty() {
        return rsx!(
            p { class: "p-4 opacity-70", "You have not submitted any applications yet." }
        );
    }

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-md",
                thead {
                    tr {
                        th { "Year" }
                        th { "Major" }
                        th { "Room Preference" }
                        th { "Status" }
                        th { "Submitted" }
                    }
                }
                tbody {
                    for row in rows {
                        tr { key: "{row.id}",
                            td { "{row.year}" }
                            td { "{row.major}" }
                            td { "{row.room_preference}" }
                            td { Badge { badge: row.badge } }
                            td { "{row.submitted}" }
                        }
                    }
                }
            }
        }
    )
}
