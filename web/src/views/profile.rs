//! User profile management panel, the only panel backed by the REST API.

use dioxus::prelude::*;

use api::{ApiClient, ApiError, User, UserDraft};
use ui::{DialogState, ModalOverlay, UserDialog};

const LOAD_FAILED: &str = "Failed to load users.";
const DELETE_FAILED: &str = "Failed to delete user.";
const REQUEST_FAILED: &str = "Request failed. Please try again.";

/// Replace the displayed collection with the backend's, in server order.
/// On failure the previous collection stays as-is and the banner is set.
async fn fetch_users(
    client: &ApiClient,
    mut users: Signal<Vec<User>>,
    mut banner: Signal<Option<String>>,
) {
    match client.list_users().await {
        Ok(list) => {
            banner.set(None);
            users.set(list);
        }
        Err(err) => {
            tracing::error!("failed to load users: {err}");
            banner.set(Some(LOAD_FAILED.to_string()));
        }
    }
}

/// Browser confirmation before a delete. Declining must send nothing.
fn confirm_delete() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure you want to delete this user?")
                    .unwrap_or(false)
            })
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}

#[component]
pub fn Profile() -> Element {
    let client = use_context::<ApiClient>();
    let users = use_signal(Vec::<User>::new);
    let mut banner = use_signal(|| Option::<String>::None);
    let mut dialog = use_signal(|| DialogState::Closed);
    let mut dialog_error = use_signal(|| Option::<String>::None);

    // Initial load on mount.
    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { fetch_users(&client, users, banner).await }
        }
    });

    let open_create = move |_| {
        dialog_error.set(None);
        dialog.set(DialogState::Creating);
    };

    let close_dialog = move |_| {
        dialog.set(DialogState::Closed);
        dialog_error.set(None);
    };

    let handle_submit = {
        let client = client.clone();
        move |draft: UserDraft| {
            let client = client.clone();
            spawn(async move {
                let result = match dialog() {
                    DialogState::Editing(user) => {
                        client.update_user(user.id, &draft.update_payload()).await
                    }
                    _ => client.create_user(&draft.create_payload()).await,
                };
                match result {
                    Ok(_) => {
                        dialog.set(DialogState::Closed);
                        dialog_error.set(None);
                        fetch_users(&client, users, banner).await;
                    }
                    // Keep the dialog open with the draft intact for a retry.
                    Err(ApiError::Rejected { detail, .. }) => {
                        dialog_error.set(Some(detail));
                    }
                    Err(err) => {
                        tracing::error!("user submit failed: {err}");
                        dialog_error.set(Some(REQUEST_FAILED.to_string()));
                    }
                }
            });
        }
    };

    rsx! {
        section {
            class: "panel",
            h2 { "User Profile Management" }

            button {
                class: "btn btn-primary",
                onclick: open_create,
                "Create New User"
            }

            if let Some(msg) = banner() {
                div { class: "banner banner-error", "{msg}" }
            }

            table {
                class: "data-table",
                thead {
                    tr {
                        th { "ID" }
                        th { "Email" }
                        th { "First Name" }
                        th { "Last Name" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if users().is_empty() {
                        tr {
                            td { colspan: "5", class: "placeholder", "No users found." }
                        }
                    }
                    for user in users() {
                        tr {
                            key: "{user.id}",
                            td { "{user.id}" }
                            td { "{user.email}" }
                            td { "{user.first_name}" }
                            td { "{user.last_name}" }
                            td {
                                button {
                                    class: "btn btn-small btn-edit",
                                    onclick: {
                                        let user = user.clone();
                                        move |_| {
                                            dialog_error.set(None);
                                            dialog.set(DialogState::Editing(user.clone()));
                                        }
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-small btn-delete",
                                    onclick: {
                                        let client = client.clone();
                                        let id = user.id;
                                        move |_| {
                                            if !confirm_delete() {
                                                return;
                                            }
                                            let client = client.clone();
                                            spawn(async move {
                                                match client.delete_user(id).await {
                                                    // Re-fetch regardless of what the
                                                    // backend said about the delete.
                                                    Ok(()) => {
                                                        fetch_users(&client, users, banner).await;
                                                    }
                                                    Err(err) => {
                                                        tracing::error!(
                                                            "failed to delete user {id}: {err}"
                                                        );
                                                        banner.set(Some(DELETE_FAILED.to_string()));
                                                    }
                                                }
                                            });
                                        }
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            if !dialog().is_closed() {
                ModalOverlay {
                    on_close: close_dialog,
                    UserDialog {
                        mode: dialog(),
                        error: dialog_error(),
                        on_submit: handle_submit,
                        on_cancel: close_dialog,
                    }
                }
            }
        }
    }
}
