// Portfolio Site - HTTP Surface
// Pages as HTML, view models as JSON

use crate::contact::{self, ContactSubmission};
use crate::html::{self, LinkStyle};
use crate::navigation::Page;
use crate::site::Site;
use crate::views::{View, ViewState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Form, Router,
};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    site: Arc<Site>,
    /// Fixed caption date; `None` reads the clock per request.
    today: Option<NaiveDate>,
}

impl AppState {
    pub fn new(site: Site) -> Self {
        AppState {
            site: Arc::new(site),
            today: None,
        }
    }

    pub fn with_date(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn page(&self, state: ViewState) -> Html<String> {
        let view = self.site.render(&state);
        let chrome = self.site.chrome(self.today(), LinkStyle::Server);
        Html(html::render_page(&view, &chrome))
    }

    fn not_found(&self, path: &str) -> Response {
        let chrome = self.site.chrome(self.today(), LinkStyle::Server);
        (StatusCode::NOT_FOUND, Html(html::render_not_found(&chrome, path))).into_response()
    }
}

/// API Response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: (),
            error: Some(message.into()),
        }
    }
}

// ============================================================================
// Page Handlers
// ============================================================================

/// GET / - Home page
async fn serve_home(State(state): State<AppState>) -> impl IntoResponse {
    state.page(ViewState::new(Page::Home))
}

/// GET /:page - Any page by slug
async fn serve_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match Page::from_slug(&slug) {
        Ok(page) => state.page(ViewState::new(page)).into_response(),
        Err(e) => {
            debug!(error = %e, "page lookup failed");
            state.not_found(&format!("/{slug}"))
        }
    }
}

/// POST /contact - Acknowledge the contact form
async fn submit_contact(
    State(state): State<AppState>,
    Form(submission): Form<ContactSubmission>,
) -> impl IntoResponse {
    let contact = contact::submit(&submission);
    state.page(ViewState::new(Page::Contact).with_contact(contact))
}

/// Fallback for anything else
async fn fallback(State(state): State<AppState>, uri: axum::http::Uri) -> Response {
    state.not_found(uri.path())
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/views/:page - Typed view model
async fn get_view(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match Page::from_slug(&slug) {
        Ok(page) => {
            let view: View = state.site.render(&ViewState::new(page));
            (StatusCode::OK, Json(ApiResponse::ok(view))).into_response()
        }
        Err(e) => (StatusCode::NOT_FOUND, Json(ApiResponse::err(e.to_string()))).into_response(),
    }
}

/// GET /api/profile - Active profile content
async fn get_profile(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.site.profile().clone()))
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/views/:page", get(get_view))
        .route("/profile", get(get_profile))
        .with_state(state.clone());

    Router::new()
        .route("/", get(serve_home))
        .route("/contact", get(serve_contact).post(submit_contact))
        .route("/:page", get(serve_page))
        .nest("/api", api_routes)
        .fallback(fallback)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// GET /contact - Contact page with an idle form
async fn serve_contact(State(state): State<AppState>) -> impl IntoResponse {
    state.page(ViewState::new(Page::Contact))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::new(Site::default()).with_date(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()))
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn get(uri: &str) -> Response {
        app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = get("/api/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, r#"{"success":true,"data":"OK"}"#);
    }

    #[tokio::test]
    async fn test_home_served_at_root() {
        let response = get("/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains("hero-section"));
        assert!(body.contains("Last updated: March 2026"));
    }

    #[tokio::test]
    async fn test_every_page_served_by_slug() {
        for page in Page::ALL {
            let response = get(&format!("/{}", page.slug())).await;
            assert_eq!(response.status(), StatusCode::OK, "{page}");

            let body = body_text(response).await;
            assert!(body.contains(&format!("href=\"{}\" class=\"active\"", LinkStyle::Server.href(page))));
        }
    }

    #[tokio::test]
    async fn test_unknown_page_is_404() {
        let response = get("/blog").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_empty_contact_submission_is_acknowledged() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/contact")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("name=&email=&message="))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Thanks for reaching out!"));
    }

    #[tokio::test]
    async fn test_view_api_returns_typed_sections() {
        let response = get("/api/views/skills").await;
        assert_eq!(response.status(), StatusCode::OK);

        let value: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["page"], "skills");
        assert_eq!(value["data"]["sections"][1]["kind"], "chart");
        assert_eq!(value["data"]["sections"][1]["figure"]["data"][0]["type"], "bar");
    }

    #[tokio::test]
    async fn test_view_api_unknown_page() {
        let response = get("/api/views/blog").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let value: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "unknown page: blog");
    }

    #[tokio::test]
    async fn test_profile_api() {
        let response = get("/api/profile").await;
        let value: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(value["data"]["name"], "Elienock Lubaya Mulumba");
    }
}
