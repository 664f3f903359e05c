use api::{User, UserDraft};

/// State of the create/edit dialog.
///
/// One tagged value instead of a show-modal flag plus a nullable editing
/// target: closing is a single assignment and there is nothing left to reset.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DialogState {
    #[default]
    Closed,
    Creating,
    Editing(User),
}

impl DialogState {
    pub fn is_closed(&self) -> bool {
        matches!(self, DialogState::Closed)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, DialogState::Editing(_))
    }

    /// Draft the dialog starts from: blank for create, the target user's
    /// fields with a blank password for edit.
    pub fn seed_draft(&self) -> UserDraft {
        match self {
            DialogState::Editing(user) => UserDraft::seeded_from(user),
            _ => UserDraft::default(),
        }
    }

    /// Dialog heading.
    pub fn title(&self) -> String {
        match self {
            DialogState::Closed => String::new(),
            DialogState::Creating => "Create New User".to_string(),
            DialogState::Editing(user) => format!("Edit User #{}", user.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 4,
            email: "a@x.com".into(),
            first_name: "A".into(),
            last_name: "X".into(),
        }
    }

    #[test]
    fn creating_seeds_an_empty_draft() {
        assert_eq!(DialogState::Creating.seed_draft(), UserDraft::default());
    }

    #[test]
    fn editing_seeds_fields_with_blank_password() {
        let draft = DialogState::Editing(sample_user()).seed_draft();
        assert_eq!(draft.email, "a@x.com");
        assert_eq!(draft.first_name, "A");
        assert_eq!(draft.last_name, "X");
        assert!(draft.password.is_empty());
    }

    #[test]
    fn default_is_closed() {
        assert!(DialogState::default().is_closed());
        assert!(!DialogState::Creating.is_closed());
    }

    #[test]
    fn titles_follow_mode() {
        assert_eq!(DialogState::Creating.title(), "Create New User");
        assert_eq!(DialogState::Editing(sample_user()).title(), "Edit User #4");
    }
}
