//! Shared application state.

use convo_core::NlpProcessor;
use std::sync::Arc;

/// State handed to every handler.
///
/// Built once at startup from explicitly constructed components. The
/// processor is immutable, so handlers share it without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    pub processor: Arc<NlpProcessor>,
}

impl AppState {
    /// Creates state around an already constructed processor.
    pub fn new(processor: NlpProcessor) -> Self {
        Self {
            processor: Arc::new(processor),
        }
    }
}
