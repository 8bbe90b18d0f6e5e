use std::sync::Arc;
use tabular_validator::TableValidator;

/// Shared, immutable state handed to every request handler.
///
/// The validator carries no mutable state, so one instance serves all
/// requests without locking; each request still allocates its own table and
/// report.
#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<TableValidator>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            validator: Arc::new(TableValidator::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
