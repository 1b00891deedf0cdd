use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::domain::entities::todo::Todo;
use crate::usecase::ports::source::{SourceError, TodoSource};

pub struct LoadService {
    source: Arc<dyn TodoSource>,
}

impl LoadService {
    pub fn new(source: Arc<dyn TodoSource>) -> Self {
        Self { source }
    }

    pub async fn fetch(&self) -> Result<Vec<Todo>, SourceError> {
        let started = Instant::now();
        let result = self.source.fetch_all().await;
        let elapsed_ms = started.elapsed().as_millis();
        match &result {
            Ok(items) => info!(count = items.len(), elapsed_ms, "fetched todos"),
            Err(err) => warn!(error = %err, elapsed_ms, "todo fetch failed"),
        }
        result
    }
}
