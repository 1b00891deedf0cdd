use chrono::NaiveTime;
use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::edit::SaveOutcome;
use crate::domain::entities::todo::Todo;
use crate::domain::grid::TodoGrid;

pub const READY_STATUS: &str = "Ready";

pub struct GridState {
    pub grid: Signal<TodoGrid>,
    pub status: Signal<String>,
}

impl GridState {
    pub fn new() -> Self {
        Self {
            grid: use_signal(TodoGrid::new),
            status: use_signal(|| READY_STATUS.to_string()),
        }
    }
}

pub fn load_status<E>(result: &Result<Vec<Todo>, E>, at: NaiveTime) -> String {
    match result {
        Ok(items) => format!("Loaded {} todos at {}", items.len(), at.format("%H:%M:%S")),
        Err(_) => format!("Load failed at {}", at.format("%H:%M:%S")),
    }
}

pub fn save_status(outcome: SaveOutcome) -> String {
    match outcome {
        SaveOutcome::Created(id) => format!("Added todo #{id}"),
        SaveOutcome::Updated(id) => format!("Updated todo #{id}"),
        SaveOutcome::Missing(id) => format!("Todo #{id} no longer exists; changes discarded"),
        SaveOutcome::IdExhausted => "No free id left for a new todo".to_string(),
        SaveOutcome::NoDraft => READY_STATUS.to_string(),
    }
}

pub fn page_summary(grid: &TodoGrid) -> String {
    format!(
        "Page {} of {} ({} todos, {} per page)",
        grid.current_page(),
        grid.total_pages().max(1),
        grid.items().len(),
        grid.page_size().get()
    )
}
