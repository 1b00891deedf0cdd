use std::sync::Arc;

use crate::domain::entities::edit::SaveOutcome;
use crate::domain::entities::todo::TodoId;
use crate::usecase::ports::dialogs::Dialogs;

pub const DELETE_TITLE: &str = "Confirm delete";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this todo?";
pub const CREATED_TITLE: &str = "Saved";
pub const CREATED_NOTICE: &str = "The todo was added successfully.";

// Mutations run after the prompt closes so no grid borrow is held while the
// dialog is up.
pub struct EditService {
    dialogs: Arc<dyn Dialogs>,
}

impl EditService {
    pub fn new(dialogs: Arc<dyn Dialogs>) -> Self {
        Self { dialogs }
    }

    pub fn confirm_remove(&self, id: TodoId, remove: impl FnOnce(TodoId) -> bool) -> bool {
        if !self.dialogs.confirm(DELETE_TITLE, DELETE_PROMPT) {
            return false;
        }
        remove(id)
    }

    pub fn save(&self, commit: impl FnOnce() -> SaveOutcome) -> SaveOutcome {
        let outcome = commit();
        if let SaveOutcome::Created(_) = outcome {
            self.dialogs.notify(CREATED_TITLE, CREATED_NOTICE);
        }
        outcome
    }
}
