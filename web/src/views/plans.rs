use dioxus::prelude::*;

/// Plan selection template. Like billing, the form is not wired to any
/// backend call.
#[component]
pub fn Plans() -> Element {
    rsx! {
        section {
            class: "panel",
            h2 { "Plans & Add-ons" }
            form {
                div {
                    class: "form-field",
                    label { r#for: "select-plan", "Select Plan" }
                    select {
                        id: "select-plan",
                        option { "Basic" }
                        option { "Pro" }
                        option { "Enterprise" }
                    }
                }
                div {
                    class: "form-field",
                    label { "Add-ons" }
                    label {
                        class: "checkbox",
                        input { r#type: "checkbox" }
                        "Extra storage"
                    }
                    label {
                        class: "checkbox",
                        input { r#type: "checkbox" }
                        "Priority support"
                    }
                    label {
                        class: "checkbox",
                        input { r#type: "checkbox" }
                        "Custom branding"
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    "Update Plan"
                }
            }
        }
    }
}
