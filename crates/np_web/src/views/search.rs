use np_core::{Result, SearchResult};

use super::{RequestId, RequestSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Loading,
    Success,
    Failed,
}

/// Results screen driven by a single free-text query.
#[derive(Debug, Clone, Default)]
pub struct SearchView {
    query: String,
    loading: bool,
    result: Option<SearchResult>,
    error: Option<String>,
    slot: RequestSlot,
}

impl SearchView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn submit(&mut self, query: &str) -> RequestId {
        self.query = query.trim().to_string();
        self.loading = true;
        self.result = None;
        self.error = None;
        self.slot.issue()
    }

    pub fn complete(&mut self, id: RequestId, outcome: Result<SearchResult>) -> bool {
        if !self.slot.is_current(id) {
            tracing::debug!("Discarding stale search response {:?}", id);
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(result) => self.result = Some(result),
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }

    pub fn phase(&self) -> SearchPhase {
        if self.loading {
            SearchPhase::Loading
        } else if self.error.is_some() {
            SearchPhase::Failed
        } else if self.result.is_some() {
            SearchPhase::Success
        } else {
            SearchPhase::Idle
        }
    }
}
