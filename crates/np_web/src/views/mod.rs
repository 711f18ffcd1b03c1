//! Per-screen UI state.
//!
//! Every asynchronous slot (news list, article summary, search answer) hands
//! out a [`RequestId`] when a request starts. A completion is applied only if
//! it carries the id the slot issued last, so a late answer for a stale
//! category or a closed article is dropped instead of overwriting newer state.

pub mod home;
pub mod search;
pub mod session;

pub use home::{HomeView, NewsPhase, SummaryPhase};
pub use search::{SearchPhase, SearchView};
pub use session::{HomeSession, SearchSession};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// Monotonic id source for one state slot.
#[derive(Debug, Clone, Default)]
pub(crate) struct RequestSlot {
    current: u64,
}

impl RequestSlot {
    pub(crate) fn issue(&mut self) -> RequestId {
        self.current += 1;
        RequestId(self.current)
    }

    pub(crate) fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_slot_is_monotonic() {
        let mut slot = RequestSlot::default();
        let first = slot.issue();
        let second = slot.issue();
        assert!(second > first);
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));
    }
}
