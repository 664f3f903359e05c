//! # Domain models for the user-management panel
//!
//! Defines the types that cross the wire between the dashboard and the
//! backend, plus the transient draft the edit dialog binds its inputs to.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | A user as returned by the backend. The id is server-assigned and immutable; the password is write-only and never present here. |
//! | [`UserDraft`] | The editable field set owned by the dialog: blank when creating, seeded from a [`User`] (password blank) when editing. |
//! | [`CreateUser`] | `POST /users` body: all four fields, password required. |
//! | [`UpdateUser`] | `PATCH /users/{id}` body: every field optional; absent keys are omitted from the JSON entirely. |

use serde::{Deserialize, Serialize};

/// A user record as the backend reports it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Transient editable copy of a user's fields, bound to the dialog inputs.
///
/// Lives exactly as long as the dialog is open; closing the dialog drops it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserDraft {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl UserDraft {
    /// Draft for editing an existing user. The password starts blank and is
    /// only sent if the user types a new one.
    pub fn seeded_from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            password: String::new(),
        }
    }

    /// Body for `POST /users`.
    pub fn create_payload(&self) -> CreateUser {
        CreateUser {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            password: self.password.clone(),
        }
    }

    /// Body for `PATCH /users/{id}`. A blank password means "keep current":
    /// the key is left out of the payload rather than sent empty.
    pub fn update_payload(&self) -> UpdateUser {
        UpdateUser {
            email: Some(self.email.clone()),
            first_name: Some(self.first_name.clone()),
            last_name: Some(self.last_name.clone()),
            password: if self.password.is_empty() {
                None
            } else {
                Some(self.password.clone())
            },
        }
    }
}

/// Request body for creating a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Request body for a partial user update. `None` fields are omitted from
/// the serialized JSON, giving update-if-present semantics on the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_user() -> User {
        User {
            id: 1,
            email: "a@x.com".into(),
            first_name: "A".into(),
            last_name: "X".into(),
        }
    }

    #[test]
    fn seeded_draft_has_blank_password() {
        let draft = UserDraft::seeded_from(&sample_user());
        assert_eq!(draft.email, "a@x.com");
        assert_eq!(draft.first_name, "A");
        assert_eq!(draft.last_name, "X");
        assert!(draft.password.is_empty());
    }

    #[test]
    fn update_payload_omits_blank_password() {
        let draft = UserDraft::seeded_from(&sample_user());
        let body = serde_json::to_value(draft.update_payload()).unwrap();
        assert_eq!(
            body,
            json!({
                "email": "a@x.com",
                "first_name": "A",
                "last_name": "X",
            })
        );
        assert!(body.get("password").is_none());
    }

    #[test]
    fn update_payload_includes_new_password() {
        let mut draft = UserDraft::seeded_from(&sample_user());
        draft.password = "hunter2".into();
        let body = serde_json::to_value(draft.update_payload()).unwrap();
        assert_eq!(body["password"], "hunter2");
    }

    #[test]
    fn create_payload_carries_all_fields() {
        let draft = UserDraft {
            email: "b@x.com".into(),
            first_name: "B".into(),
            last_name: "Y".into(),
            password: "secret".into(),
        };
        let body = serde_json::to_value(draft.create_payload()).unwrap();
        assert_eq!(
            body,
            json!({
                "email": "b@x.com",
                "first_name": "B",
                "last_name": "Y",
                "password": "secret",
            })
        );
    }

    #[test]
    fn user_round_trips_through_json() {
        let parsed: User =
            serde_json::from_str(r#"{"id":1,"email":"a@x.com","first_name":"A","last_name":"X"}"#)
                .unwrap();
        assert_eq!(parsed, sample_user());
    }
}
