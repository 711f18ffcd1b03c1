use np_core::{parse_news_list, ArticleSummary, Category, NewsItem, Parsed};

use super::{RequestId, RequestSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsPhase {
    Loading,
    Populated,
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryPhase {
    Closed,
    Loading,
    Ready,
    /// Settled without a summary.
    Failed,
}

/// Briefing screen: category filter, news grid, Quick Read modal.
#[derive(Debug, Clone)]
pub struct HomeView {
    category: Category,
    news: Vec<NewsItem>,
    loading_news: bool,
    news_slot: RequestSlot,
    reading: Option<NewsItem>,
    summary: Option<ArticleSummary>,
    loading_summary: bool,
    summary_slot: RequestSlot,
}

impl Default for HomeView {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeView {
    /// The first news fetch is issued on mount, so a fresh view starts loading.
    pub fn new() -> Self {
        Self {
            category: Category::All,
            news: Vec::new(),
            loading_news: true,
            news_slot: RequestSlot::default(),
            reading: None,
            summary: None,
            loading_summary: false,
            summary_slot: RequestSlot::default(),
        }
    }

    /// Fresh view filtered on `category`, with no news request issued yet.
    pub fn with_category(category: Category) -> Self {
        Self {
            category,
            ..Self::new()
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }

    pub fn is_loading_news(&self) -> bool {
        self.loading_news
    }

    pub fn reading(&self) -> Option<&NewsItem> {
        self.reading.as_ref()
    }

    pub fn summary(&self) -> Option<&ArticleSummary> {
        self.summary.as_ref()
    }

    pub fn is_loading_summary(&self) -> bool {
        self.loading_summary
    }

    pub fn select_category(&mut self, category: Category) -> RequestId {
        self.category = category;
        self.news.clear();
        self.loading_news = true;
        self.news_slot.issue()
    }

    pub fn reset_filters(&mut self) -> RequestId {
        self.select_category(Category::All)
    }

    /// Applies raw provider text for the news request `id`. Returns `false`
    /// when `id` has been superseded and the text was discarded.
    pub fn complete_news(&mut self, id: RequestId, raw: &str) -> bool {
        if !self.news_slot.is_current(id) {
            tracing::debug!("Discarding stale news response {:?}", id);
            return false;
        }
        self.news = match parse_news_list(raw) {
            Parsed::Valid(items) => items,
            Parsed::Malformed(reason) => {
                tracing::warn!("Failed to parse news for {}: {}", self.category, reason);
                Vec::new()
            }
        };
        self.loading_news = false;
        true
    }

    pub fn open_article(&mut self, item: NewsItem) -> RequestId {
        self.reading = Some(item);
        self.summary = None;
        self.loading_summary = true;
        self.summary_slot.issue()
    }

    pub fn complete_summary(&mut self, id: RequestId, summary: Option<ArticleSummary>) -> bool {
        if self.reading.is_none() || !self.summary_slot.is_current(id) {
            tracing::debug!("Discarding stale summary response {:?}", id);
            return false;
        }
        self.summary = summary;
        self.loading_summary = false;
        true
    }

    /// Closing does not cancel an in-flight summary; bumping the slot makes
    /// its eventual completion stale.
    pub fn close_article(&mut self) {
        self.reading = None;
        self.summary = None;
        self.loading_summary = false;
        self.summary_slot.issue();
    }

    pub fn news_phase(&self) -> NewsPhase {
        if self.loading_news {
            NewsPhase::Loading
        } else if self.news.is_empty() {
            NewsPhase::Empty
        } else {
            NewsPhase::Populated
        }
    }

    pub fn empty_message(&self) -> String {
        format!("No news found for {}.", self.category)
    }

    pub fn summary_phase(&self) -> SummaryPhase {
        match (&self.reading, self.loading_summary, &self.summary) {
            (None, _, _) => SummaryPhase::Closed,
            (Some(_), true, _) => SummaryPhase::Loading,
            (Some(_), false, Some(_)) => SummaryPhase::Ready,
            (Some(_), false, None) => SummaryPhase::Failed,
        }
    }
}
