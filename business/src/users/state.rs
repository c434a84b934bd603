//! View-model of the users table.
//!
//! Everything the user can type or open lives here: the create form, the row being
//! edited, the pending delete confirmation and the blocking alert. Widgets read it,
//! bind text inputs to it, and report clicks as `UserListEvent`s; only the
//! controller changes `current_action` or `alert`.

use roster_states::State;
use std::any::Any;
use ustr::Ustr;

use super::model::{FieldsError, UserFields, UserRecord};

/// Which row-level interaction is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UserAction {
    #[default]
    None,

    /// Row `id` shows text inputs plus Save/Cancel.
    Edit(Ustr),

    /// Waiting for the user to confirm deleting `id`.
    ConfirmDelete(Ustr),
}

/// Unsaved values of the row being edited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditDraft {
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Default)]
pub struct UserListState {
    /// Create form: name input.
    pub new_name: String,

    /// Create form: avatar URL input.
    pub new_avatar: String,

    pub current_action: UserAction,

    pub draft: EditDraft,

    /// Message of the blocking alert, if one is open.
    pub alert: Option<String>,
}

impl State for UserListState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl UserListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the create form, clearing it when the submission is accepted.
    pub fn take_create_fields(&mut self) -> Result<UserFields, FieldsError> {
        let fields = UserFields::new(&self.new_name, &self.new_avatar)?;
        self.new_name.clear();
        self.new_avatar.clear();
        Ok(fields)
    }

    /// Put row `id` into edit mode, seeding the inputs from the displayed record.
    pub fn begin_edit(&mut self, id: Ustr, record: Option<&UserRecord>) {
        self.draft = record
            .map(|user| EditDraft {
                name: user.name.clone(),
                avatar: user.avatar.clone(),
            })
            .unwrap_or_default();
        self.current_action = UserAction::Edit(id);
    }

    pub fn draft_fields(&self) -> Result<UserFields, FieldsError> {
        UserFields::new(&self.draft.name, &self.draft.avatar)
    }

    pub fn request_delete(&mut self, id: Ustr) {
        self.current_action = UserAction::ConfirmDelete(id);
    }

    pub fn close_action(&mut self) {
        self.current_action = UserAction::None;
        self.draft = EditDraft::default();
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn current_action(&self) -> &UserAction {
        &self.current_action
    }

    pub fn editing_id(&self) -> Option<Ustr> {
        match self.current_action {
            UserAction::Edit(id) => Some(id),
            _ => None,
        }
    }

    pub fn pending_delete(&self) -> Option<Ustr> {
        match self.current_action {
            UserAction::ConfirmDelete(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing_id().is_some_and(|editing| editing.as_str() == id)
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }
}
