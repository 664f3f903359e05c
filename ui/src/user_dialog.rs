use dioxus::prelude::*;

use api::UserDraft;

use crate::DialogState;

/// Create/edit form shown inside a [`crate::ModalOverlay`].
///
/// The draft lives in this component's signals, so it exists exactly as long
/// as the dialog is mounted: the caller renders the dialog only while open,
/// which resets the fields on every reopen. On a rejected submit the caller
/// re-renders with `error` set and the draft stays intact for a retry.
///
/// Validation is browser-native `required` constraints only; the password is
/// optional in edit mode (blank means "keep current").
#[component]
pub fn UserDialog(
    mode: DialogState,
    error: Option<String>,
    on_submit: EventHandler<UserDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let is_editing = mode.is_editing();
    let UserDraft {
        email: seed_email,
        first_name: seed_first_name,
        last_name: seed_last_name,
        password: _,
    } = mode.seed_draft();

    let mut email = use_signal(move || seed_email);
    let mut first_name = use_signal(move || seed_first_name);
    let mut last_name = use_signal(move || seed_last_name);
    let mut password = use_signal(String::new);

    if mode.is_closed() {
        return rsx! {};
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        tracing::debug!(editing = is_editing, "submitting user form");
        on_submit.call(UserDraft {
            email: email(),
            first_name: first_name(),
            last_name: last_name(),
            password: password(),
        });
    };

    rsx! {
        div {
            class: "dialog",
            h2 { class: "dialog-title", "{mode.title()}" }

            if let Some(err) = error {
                div { class: "form-error", "{err}" }
            }

            form {
                onsubmit: handle_submit,

                div {
                    class: "form-field",
                    label { r#for: "user-email", "Email address" }
                    input {
                        id: "user-email",
                        r#type: "email",
                        required: true,
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "user-first-name", "First Name" }
                    input {
                        id: "user-first-name",
                        r#type: "text",
                        required: true,
                        value: first_name(),
                        oninput: move |evt: FormEvent| first_name.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { r#for: "user-last-name", "Last Name" }
                    input {
                        id: "user-last-name",
                        r#type: "text",
                        required: true,
                        value: last_name(),
                        oninput: move |evt: FormEvent| last_name.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label {
                        r#for: "user-password",
                        if is_editing {
                            "New Password (leave blank to keep current)"
                        } else {
                            "Password"
                        }
                    }
                    input {
                        id: "user-password",
                        r#type: "password",
                        required: !is_editing,
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        if is_editing { "Update User" } else { "Create User" }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
