use crate::domain::entities::todo::{Todo, TodoId};

// The form edits its own copy; `items` only changes on save.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Table,
    Editing { draft: Todo, is_new: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(TodoId),
    Updated(TodoId),
    Missing(TodoId),
    IdExhausted,
    NoDraft,
}
