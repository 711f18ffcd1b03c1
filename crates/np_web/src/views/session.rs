use np_core::{Category, NewsItem};
use np_inference::Gateway;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;

use super::{HomeView, SearchView};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Drives a [`HomeView`] against the gateway. Each action updates the view
/// synchronously, then spawns the gateway call; the returned handle resolves
/// to whether the completion was applied or discarded as stale.
#[derive(Debug, Clone)]
pub struct HomeSession {
    view: Arc<Mutex<HomeView>>,
    gateway: Gateway,
}

impl HomeSession {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            view: Arc::new(Mutex::new(HomeView::new())),
            gateway,
        }
    }

    /// Session whose view already shows `category`; nothing is fetched until
    /// an action runs.
    pub fn for_category(gateway: Gateway, category: Category) -> Self {
        Self {
            view: Arc::new(Mutex::new(HomeView::with_category(category))),
            gateway,
        }
    }

    pub fn snapshot(&self) -> HomeView {
        lock(&self.view).clone()
    }

    pub fn select_category(&self, category: Category) -> JoinHandle<bool> {
        let id = lock(&self.view).select_category(category);
        let view = self.view.clone();
        let gateway = self.gateway.clone();
        tokio::spawn(async move {
            let raw = gateway.fetch_trending_news(category.label()).await;
            lock(&view).complete_news(id, &raw)
        })
    }

    pub fn reset_filters(&self) -> JoinHandle<bool> {
        self.select_category(Category::All)
    }

    pub fn open_article(&self, item: NewsItem) -> JoinHandle<bool> {
        let title = item.title.clone();
        let source = item.source_or_default().to_string();
        let id = lock(&self.view).open_article(item);
        let view = self.view.clone();
        let gateway = self.gateway.clone();
        tokio::spawn(async move {
            let summary = gateway.summarize_article(&title, &source).await;
            lock(&view).complete_summary(id, Some(summary))
        })
    }

    pub fn close_article(&self) {
        lock(&self.view).close_article();
    }
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    view: Arc<Mutex<SearchView>>,
    gateway: Gateway,
}

impl SearchSession {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            view: Arc::new(Mutex::new(SearchView::new())),
            gateway,
        }
    }

    pub fn snapshot(&self) -> SearchView {
        lock(&self.view).clone()
    }

    pub fn submit(&self, query: &str) -> JoinHandle<bool> {
        let id = lock(&self.view).submit(query);
        let query = query.trim().to_string();
        let view = self.view.clone();
        let gateway = self.gateway.clone();
        tokio::spawn(async move {
            let outcome = gateway.perform_general_search(&query).await;
            lock(&view).complete(id, outcome)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{NewsPhase, SearchPhase, SummaryPhase};
    use np_core::ArticleSummary;
    use np_inference::models::ScriptedProvider;
    use std::time::Duration;

    fn session(provider: ScriptedProvider) -> HomeSession {
        HomeSession::new(Gateway::new(Arc::new(provider)))
    }

    #[tokio::test]
    async fn test_late_response_for_old_category_is_discarded() {
        let session = session(
            ScriptedProvider::new()
                .reply_after(Duration::from_millis(80), r#"[{"title": "Old politics story", "category": "Politics"}]"#)
                .reply(r#"[{"title": "Fresh sports story", "category": "Sports"}]"#),
        );

        let stale = session.select_category(Category::Politics);
        let fresh = session.select_category(Category::Sports);

        assert!(fresh.await.unwrap());
        assert!(!stale.await.unwrap());

        let view = session.snapshot();
        assert_eq!(view.category(), Category::Sports);
        assert_eq!(view.news().len(), 1);
        assert_eq!(view.news()[0].title, "Fresh sports story");
    }

    #[tokio::test]
    async fn test_failed_fetch_shows_empty_state() {
        let session = session(ScriptedProvider::new().fail(500, "boom"));
        assert!(session.select_category(Category::Technology).await.unwrap());
        let view = session.snapshot();
        assert_eq!(view.news_phase(), NewsPhase::Empty);
        assert_eq!(view.empty_message(), "No news found for Technology.");
    }

    #[tokio::test]
    async fn test_closing_discards_inflight_summary() {
        let session = session(ScriptedProvider::new().reply_after(
            Duration::from_millis(50),
            r#"{"points": ["a", "b", "c"], "whyItMatters": "x"}"#,
        ));
        let handle = session.open_article(NewsItem::new("Naira hits new low"));
        assert_eq!(session.snapshot().summary_phase(), SummaryPhase::Loading);
        session.close_article();

        assert!(!handle.await.unwrap());
        assert_eq!(session.snapshot().summary_phase(), SummaryPhase::Closed);
    }

    #[tokio::test]
    async fn test_summary_failure_renders_fallback() {
        let session = session(ScriptedProvider::new().fail(500, "provider threw"));
        let mut item = NewsItem::new("Naira hits new low");
        item.source = Some("Punch NG".to_string());
        assert!(session.open_article(item).await.unwrap());

        let view = session.snapshot();
        assert_eq!(view.summary_phase(), SummaryPhase::Ready);
        assert_eq!(view.summary(), Some(&ArticleSummary::fallback()));
    }

    #[tokio::test]
    async fn test_opening_article_only_summarizes() {
        let provider = Arc::new(ScriptedProvider::new().reply(
            r#"{"points": ["a", "b", "c"], "whyItMatters": "x"}"#,
        ));
        let session = HomeSession::for_category(Gateway::new(provider.clone()), Category::Metro);
        assert!(session.open_article(NewsItem::new("Blue Line timetable")).await.unwrap());

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].contents.starts_with("Research the news article"));
        let view = session.snapshot();
        assert_eq!(view.category(), Category::Metro);
        assert_eq!(view.summary_phase(), SummaryPhase::Ready);
    }

    #[tokio::test]
    async fn test_search_session() {
        let provider = ScriptedProvider::new()
            .reply_after(Duration::from_millis(50), "old answer")
            .reply("new answer");
        let session = SearchSession::new(Gateway::new(Arc::new(provider)));

        let old = session.submit("Afrobeats");
        let new = session.submit("Naira Rate");
        assert!(new.await.unwrap());
        assert!(!old.await.unwrap());

        let view = session.snapshot();
        assert_eq!(view.phase(), SearchPhase::Success);
        assert_eq!(view.query(), "Naira Rate");
        assert_eq!(view.result().unwrap().text, "new answer");
    }
}
