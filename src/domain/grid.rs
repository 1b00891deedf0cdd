use std::fmt::Display;

use tracing::{debug, error, info, warn};

use crate::domain::entities::edit::{SaveOutcome, View};
use crate::domain::entities::paging::{
    clamp_page, page_window, total_pages, PageSize, SortDirection, SortField,
};
use crate::domain::entities::todo::{Todo, TodoId};

// Only the most recent ticket may replace the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct TodoGrid {
    items: Vec<Todo>,
    loading: bool,
    view: View,
    sort_direction: SortDirection,
    current_page: usize,
    page_size: PageSize,
    generation: u64,
}

impl Default for TodoGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoGrid {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<Todo>) -> Self {
        Self {
            items,
            loading: false,
            view: View::Table,
            sort_direction: SortDirection::default(),
            current_page: 1,
            page_size: PageSize::DEFAULT,
            generation: 0,
        }
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.page_size.get())
    }

    pub fn visible_items(&self) -> &[Todo] {
        &self.items[page_window(self.items.len(), self.current_page, self.page_size.get())]
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket(self.generation)
    }

    // Failures are logged and the list is kept. `false` means the ticket was
    // superseded and the result dropped.
    pub fn finish_load<E: Display>(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Todo>, E>,
    ) -> bool {
        if ticket.0 != self.generation {
            debug!(
                ticket = ticket.0,
                latest = self.generation,
                "discarding superseded todo response"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(items) => {
                info!(count = items.len(), "todo list replaced");
                self.items = items;
                self.clamp_current_page();
            }
            Err(err) => {
                error!(error = %err, "failed to load todos");
            }
        }
        true
    }

    pub fn select_page(&mut self, page: usize) {
        self.current_page = clamp_page(page, self.items.len(), self.page_size.get());
    }

    // `true` when the size changed and the list must be fetched again.
    pub fn set_page_size(&mut self, size: PageSize) -> bool {
        if self.page_size == size {
            return false;
        }
        info!(from = self.page_size.get(), to = size.get(), "page size changed");
        self.page_size = size;
        self.clamp_current_page();
        true
    }

    fn clamp_current_page(&mut self) {
        self.current_page = clamp_page(self.current_page, self.items.len(), self.page_size.get());
    }

    // One flag for every column; switching columns does not reset it.
    pub fn sort_by(&mut self, field: SortField) -> SortDirection {
        let direction = self.sort_direction;
        sort_todos(&mut self.items, field, direction);
        self.sort_direction = direction.toggled();
        debug!(?field, ?direction, "sorted todos");
        direction
    }

    pub fn begin_add(&mut self) {
        self.view = View::Editing {
            draft: Todo::draft(),
            is_new: true,
        };
    }

    pub fn begin_edit(&mut self, id: TodoId) -> bool {
        let Some(todo) = self.items.iter().find(|todo| todo.id == id) else {
            warn!(%id, "edit requested for unknown todo");
            return false;
        };
        self.view = View::Editing {
            draft: todo.clone(),
            is_new: false,
        };
        true
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        if let View::Editing { draft, .. } = &mut self.view {
            draft.title = title.into();
        }
    }

    pub fn set_draft_completed(&mut self, completed: bool) {
        if let View::Editing { draft, .. } = &mut self.view {
            draft.completed = completed;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.view = View::Table;
    }

    pub fn save_draft(&mut self) -> SaveOutcome {
        let View::Editing { mut draft, is_new } = std::mem::take(&mut self.view) else {
            return SaveOutcome::NoDraft;
        };

        if is_new {
            let Some(id) = self.next_id() else {
                warn!("no id left above the current maximum; draft kept open");
                self.view = View::Editing { draft, is_new };
                return SaveOutcome::IdExhausted;
            };
            draft.id = id;
            self.items.push(draft);
            info!(%id, "todo created");
            return SaveOutcome::Created(id);
        }

        let id = draft.id;
        match self.items.iter_mut().find(|todo| todo.id == id) {
            Some(slot) => {
                *slot = draft;
                info!(%id, "todo updated");
                SaveOutcome::Updated(id)
            }
            None => {
                warn!(%id, "todo vanished before save; draft dropped");
                SaveOutcome::Missing(id)
            }
        }
    }

    // `max(id) + 1`, 1 for an empty list, `None` once `i64::MAX` is taken.
    pub fn next_id(&self) -> Option<TodoId> {
        match self.items.iter().map(|todo| todo.id.0).max() {
            Some(max) => max.checked_add(1).map(TodoId),
            None => Some(TodoId(1)),
        }
    }

    pub fn remove(&mut self, id: TodoId) -> Option<Todo> {
        let Some(index) = self.items.iter().position(|todo| todo.id == id) else {
            warn!(%id, "delete requested for unknown todo");
            return None;
        };
        let removed = self.items.remove(index);
        self.clamp_current_page();
        info!(%id, "todo deleted");
        Some(removed)
    }
}

pub fn sort_todos(items: &mut [Todo], field: SortField, direction: SortDirection) {
    items.sort_by(|a, b| {
        let ordering = match field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Title => a.title.cmp(&b.title),
            SortField::Completed => a.completed.cmp(&b.completed),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
