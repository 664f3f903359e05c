use dioxus::prelude::*;

/// Fixed feed shown on the notifications panel. Display-only: there is no
/// backend contract for notifications.
const NOTIFICATIONS: &[(&str, &str)] = &[
    ("2025-10-24", "Your billing statement is ready."),
    ("2025-10-20", "Password changed successfully."),
];

#[component]
pub fn Notifications() -> Element {
    rsx! {
        section {
            class: "panel",
            h2 { "Notifications" }
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Date" }
                        th { "Message" }
                    }
                }
                tbody {
                    for (date, message) in NOTIFICATIONS.iter().copied() {
                        tr {
                            key: "{date}",
                            td { "{date}" }
                            td { "{message}" }
                        }
                    }
                }
            }
        }
    }
}
