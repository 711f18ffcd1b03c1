use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use futures::future::join_all;
use np_core::{search_path, Category, Error, NewsItem};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::pages::{render_home, render_search};
use crate::state::THEME_COOKIE;
use crate::views::{HomeSession, SearchPhase, SearchSession};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct HomeParams {
    pub category: Option<String>,
    pub read_title: Option<String>,
    pub read_source: Option<String>,
    pub read_category: Option<String>,
    pub read_time: Option<String>,
    pub read_url: Option<String>,
}

impl HomeParams {
    /// Article to open in the Quick Read modal, if one was clicked.
    fn article(&self) -> Option<NewsItem> {
        let title = self.read_title.as_deref().map(str::trim).filter(|t| !t.is_empty())?;
        Some(NewsItem {
            title: title.to_string(),
            summary: None,
            category: self.read_category.clone().unwrap_or_default(),
            time: self.read_time.clone().unwrap_or_default(),
            source: self.read_source.clone(),
            url: self.read_url.clone(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewsParams {
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SummaryParams {
    pub title: Option<String>,
    pub source: Option<String>,
}

/// JSON error body for the `/api` routes.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::BAD_GATEWAY,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

async fn settle(handles: Vec<JoinHandle<bool>>) {
    for outcome in join_all(handles).await {
        if let Err(e) = outcome {
            tracing::error!("View task failed: {}", e);
        }
    }
}

pub async fn home(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(params): Query<HomeParams>,
) -> Html<String> {
    let theme = state.theme_for(&headers);
    let category = Category::parse_or_all(params.category.as_deref());

    // a Quick Read only summarizes; the grid behind the modal is not refetched
    let session = HomeSession::for_category(state.gateway.clone(), category);
    let handle = match params.article() {
        Some(item) => session.open_article(item),
        None => session.select_category(category),
    };
    settle(vec![handle]).await;

    Html(render_home(&session.snapshot(), theme))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = params.q.unwrap_or_default();
    if query.trim().is_empty() {
        return Redirect::to("/").into_response();
    }
    // form submissions arrive as `q=Lagos+Tech`; results live at `q=Lagos%20Tech`
    let canonical = search_path(&query);
    if uri.path_and_query().map(|pq| pq.as_str()) != Some(canonical.as_str()) {
        return Redirect::to(&canonical).into_response();
    }
    let theme = state.theme_for(&headers);

    let session = SearchSession::new(state.gateway.clone());
    settle(vec![session.submit(&query)]).await;

    let view = session.snapshot();
    let status = match view.phase() {
        SearchPhase::Failed => StatusCode::BAD_GATEWAY,
        _ => StatusCode::OK,
    };
    (status, Html(render_search(&view, theme))).into_response()
}

fn redirect_target(headers: &HeaderMap) -> String {
    headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|referer| url::Url::parse(referer).ok())
        // `//host` would be read as a protocol-relative, off-site location
        .filter(|url| !url.path().starts_with("//"))
        .map(|url| match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        })
        .unwrap_or_else(|| "/".to_string())
}

pub async fn toggle_theme(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let theme = state.theme_for(&headers).toggle();
    tracing::debug!("Switching theme to {}", theme);
    let cookie = format!(
        "{}={}; Path=/; Max-Age=31536000; SameSite=Lax",
        THEME_COOKIE, theme
    );
    (
        [(header::SET_COOKIE, cookie)],
        Redirect::to(&redirect_target(&headers)),
    )
        .into_response()
}

pub async fn api_news(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NewsParams>,
) -> Json<Vec<NewsItem>> {
    let category = Category::parse_or_all(params.category.as_deref());
    Json(state.gateway.load_news(category.label()).await)
}

pub async fn api_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SummaryParams>,
) -> Result<Json<np_core::ArticleSummary>, ApiError> {
    let title = params.title.unwrap_or_default();
    if title.trim().is_empty() {
        return Err(Error::InvalidInput("title is required".to_string()).into());
    }
    let source = params.source.unwrap_or_default();
    Ok(Json(state.gateway.summarize_article(&title, &source).await))
}

pub async fn api_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<np_core::SearchResult>, ApiError> {
    let query = params.q.unwrap_or_default();
    let result = state.gateway.perform_general_search(&query).await?;
    Ok(Json(result))
}

pub async fn health() -> &'static str {
    "ok"
}
