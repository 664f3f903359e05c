use dioxus::prelude::*;

/// Billing form template. No submit handler is wired: there is no backend
/// contract for payments, so submission keeps default browser behavior.
#[component]
pub fn Billing() -> Element {
    rsx! {
        section {
            class: "panel",
            h2 { "Billing & Invoices" }
            form {
                div {
                    class: "form-field",
                    label { r#for: "card-number", "Credit Card Number" }
                    input {
                        id: "card-number",
                        r#type: "text",
                        placeholder: "Card number",
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { r#for: "expiry-date", "Expiry Date" }
                        input {
                            id: "expiry-date",
                            r#type: "text",
                            placeholder: "MM/YY",
                        }
                    }
                    div {
                        class: "form-field",
                        label { r#for: "cvv", "CVV" }
                        input {
                            id: "cvv",
                            r#type: "password",
                            placeholder: "CVV",
                        }
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "billing-address", "Billing Address" }
                    textarea { id: "billing-address", rows: "3" }
                }
                button {
                    class: "btn btn-success",
                    r#type: "submit",
                    "Submit Payment"
                }
            }
        }
    }
}
