//! This crate contains all shared UI for the workspace.

mod sidebar;
pub use sidebar::Sidebar;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod dialog_state;
pub use dialog_state::DialogState;

mod user_dialog;
pub use user_dialog::UserDialog;
