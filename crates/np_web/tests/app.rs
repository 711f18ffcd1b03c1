use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use np_core::{ArticleSummary, NewsItem, SearchResult, Theme};
use np_inference::models::ScriptedProvider;
use np_inference::Gateway;
use np_web::{create_app, AppState};
use std::sync::Arc;
use tower::ServiceExt;

fn app(provider: ScriptedProvider) -> (Router, Arc<ScriptedProvider>) {
    let provider = Arc::new(provider);
    let state = AppState::new(Gateway::new(provider.clone()), Theme::Dark);
    (create_app(state), provider)
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn sports_news(count: usize) -> String {
    let items: Vec<serde_json::Value> = (1..=count)
        .map(|i| {
            serde_json::json!({
                "title": format!("Super Eagles story {}", i),
                "summary": "Teaser",
                "category": "Sports",
                "time": format!("{}h ago", i),
                "source": "Pulse NG",
                "url": format!("pulse.ng/sports/{}", i),
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}

#[tokio::test]
async fn test_sports_category_renders_nine_cards() {
    let (app, provider) = app(ScriptedProvider::new().reply(sports_news(9)));
    let (status, html) = get(app, "/?category=Sports").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("news-card").count(), 9);
    assert!(!html.contains("No news found"));
    assert!(provider.requests()[0].contents.contains("related to \"Sports\""));
}

#[tokio::test]
async fn test_fenced_empty_news_shows_reset() {
    let (app, _) = app(ScriptedProvider::new().reply("```json\n[]\n```"));
    let (status, html) = get(app, "/?category=Politics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No news found for Politics."));
    assert!(html.contains("Reset Filters"));
}

#[tokio::test]
async fn test_unknown_category_falls_back_to_all() {
    let (app, provider) = app(ScriptedProvider::new().reply("[]"));
    let (_, html) = get(app, "/?category=Weather").await;
    assert!(html.contains("No news found for All."));
    assert!(!provider.requests()[0].contents.contains("related to"));
}

#[tokio::test]
async fn test_quick_read_opens_modal_with_fallback() {
    let (app, provider) = app(ScriptedProvider::new().fail(500, "provider threw"));
    let (status, html) = get(
        app,
        "/?category=Business&read_title=Naira%20hits%20new%20low&read_source=Punch%20NG&read_url=punchng.com%2Fnaira",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<body class=\"modal-open\">"));
    assert!(html.contains("Quick Summary"));
    assert!(html.contains("Details unavailable."));
    assert!(html.contains("href=\"https://punchng.com/naira\""));
    assert!(html.contains("<a class=\"filter active\" href=\"/?category=Business\">Business</a>"));
    assert!(!html.contains("news-card"));

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].contents.contains("\"Naira hits new low\" from \"Punch NG\""));
}

#[tokio::test]
async fn test_search_page() {
    let (app, provider) = app(ScriptedProvider::new().reply("**Lagos** is a tech hub."));
    let (status, html) = get(app, "/search?q=Lagos%20Tech").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<strong>Lagos</strong> is a tech hub."));
    assert_eq!(provider.requests()[0].contents, "Lagos Tech");
}

#[tokio::test]
async fn test_search_form_submission_redirects_to_encoded_path() {
    let (app, provider) = app(ScriptedProvider::new());
    let form = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", "Lagos Tech")
        .finish();
    assert_eq!(form, "q=Lagos+Tech");

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/search?{}", form))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/search?q=Lagos%20Tech");
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn test_encoded_search_path_is_served() {
    let (app, provider) = app(ScriptedProvider::new().reply("Answer"));
    let (status, _) = get(app, "/search?q=1%2B1%20%26%20more").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(provider.requests()[0].contents, "1+1 & more");
}

#[tokio::test]
async fn test_search_failure_is_bad_gateway() {
    let (app, _) = app(ScriptedProvider::new().fail(503, "overloaded"));
    let (status, html) = get(app, "/search?q=Naira").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.contains("Something went wrong while searching."));
}

#[tokio::test]
async fn test_blank_search_redirects_home() {
    let (app, provider) = app(ScriptedProvider::new());
    let response = app
        .oneshot(Request::builder().uri("/search?q=%20%20").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn test_theme_toggle_sets_cookie() {
    let (app, _) = app(ScriptedProvider::new());
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/theme")
                .header(header::COOKIE, "theme=dark")
                .header(header::REFERER, "http://localhost:3000/?category=Metro")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/?category=Metro");
    let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("theme=light;"));
}

#[tokio::test]
async fn test_theme_cookie_is_rendered() {
    let (app, _) = app(ScriptedProvider::new().reply("[]"));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(header::COOKIE, "theme=light")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("<html lang=\"en\" class=\"light\">"));
}

#[tokio::test]
async fn test_api_news() {
    let (app, _) = app(ScriptedProvider::new().reply(sports_news(2)));
    let (status, body) = get(app, "/api/news?category=sports").await;
    assert_eq!(status, StatusCode::OK);
    let items: Vec<NewsItem> = serde_json::from_str(&body).unwrap();
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_api_news_swallows_failures() {
    let (app, _) = app(ScriptedProvider::new().fail(500, "boom"));
    let (status, body) = get(app, "/api/news").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_api_summary() {
    let (app, _) = app(ScriptedProvider::new().fail(500, "boom"));
    let (status, body) = get(app, "/api/summary?title=Naira%20hits%20new%20low&source=Punch%20NG").await;
    assert_eq!(status, StatusCode::OK);
    let summary: ArticleSummary = serde_json::from_str(&body).unwrap();
    assert_eq!(summary, ArticleSummary::fallback());

    let (app, _) = self::app(ScriptedProvider::new());
    let (status, _) = get(app, "/api/summary").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_search() {
    let (app, _) = app(ScriptedProvider::new().reply(""));
    let (status, body) = get(app, "/api/search?q=Elections").await;
    assert_eq!(status, StatusCode::OK);
    let result: SearchResult = serde_json::from_str(&body).unwrap();
    assert_eq!(result.text, "No results found.");

    let (app, _) = self::app(ScriptedProvider::new().fail(500, "boom"));
    let (status, body) = get(app, "/api/search?q=Elections").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.contains("\"error\""));
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app(ScriptedProvider::new());
    let (status, body) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}
