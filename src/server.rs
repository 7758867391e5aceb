//! HTTP surface: a read-only axum router over the content store.

use crate::config::Config;
use crate::content::{ContentKind, ContentStore};
use crate::error::{ApiError, ContentError};
use crate::locale::Locale;
use crate::models::{
    AboutResponse, FaqItem, LessonItem, LessonPreview, PricingPlan, ServiceItem, Testimonial,
};
use anyhow::{Context, Result};
use axum::async_trait;
use axum::extract::{FromRequestParts, Query, State};
use axum::http::request::Parts;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

const SERVICE_NAME: &str = "English Tutor API";
const SERVICE_DESCRIPTION: &str = "API for the English Tutor Website";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: ContentStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: ContentStore::new(config.content_dir.clone()),
            config: Arc::new(config),
        }
    }
}

/// `?lang=<code>` query parameter. Missing means baseline.
///
/// Extraction never rejects a request: a repeated `lang` keeps the last value
/// and an unparsable query string counts as no preference.
#[derive(Debug, Default)]
pub struct LangQuery {
    pub lang: Option<Locale>,
}

impl LangQuery {
    /// Pick `lang` out of decoded query pairs.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let lang = pairs
            .into_iter()
            .rev()
            .find(|(key, _)| key == "lang")
            .map(|(_, value)| Locale::from(value));
        Self { lang }
    }

    pub fn locale(self) -> Locale {
        self.lang.unwrap_or_default()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for LangQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Query::<Vec<(String, String)>>::try_from_uri(&parts.uri) {
            Ok(Query(pairs)) => pairs,
            Err(e) => {
                warn!("Ignoring unparsable query string: {}", e);
                Vec::new()
            }
        };
        Ok(Self::from_pairs(pairs))
    }
}

/// Body of `GET /`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<String>,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);
    let cors = cors_layer(&state.config.allowed_origins);

    Router::new()
        .route("/", get(root))
        .route(ContentKind::About.route(), get(get_about))
        .route(ContentKind::Services.route(), get(get_services))
        .route(ContentKind::LessonPreviews.route(), get(get_lesson_previews))
        .route(ContentKind::LessonItems.route(), get(get_lesson_items))
        .route(ContentKind::Pricing.route(), get(get_pricing))
        .route(ContentKind::Testimonials.route(), get(get_testimonials))
        .route(ContentKind::Faq.route(), get(get_faq))
        .nest_service("/content", assets)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl+C.
pub async fn serve(config: Config) -> Result<()> {
    let addr = config.bind_addr();
    let state = AppState::new(config);

    if !state.store.root().is_dir() {
        warn!(
            "Content directory {} does not exist, every content request will return 404",
            state.store.root().display()
        );
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Turn a loader result into a handler result.
fn respond<T>(
    kind: ContentKind,
    locale: &Locale,
    result: Result<T, ContentError>,
) -> Result<Json<T>, ApiError> {
    result
        .map(Json)
        .map_err(|_| ApiError::NotFound(kind.not_found_message(locale)))
}

// ==================== Handlers ====================

async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: SERVICE_DESCRIPTION.to_string(),
        endpoints: ContentKind::ALL
            .iter()
            .map(|kind| kind.route().to_string())
            .collect(),
    })
}

async fn get_about(
    State(state): State<AppState>,
    query: LangQuery,
) -> Result<Json<AboutResponse>, ApiError> {
    let locale = query.locale();
    respond(ContentKind::About, &locale, state.store.load_about(&locale))
}

async fn get_services(
    State(state): State<AppState>,
    query: LangQuery,
) -> Result<Json<Vec<ServiceItem>>, ApiError> {
    let locale = query.locale();
    respond(ContentKind::Services, &locale, state.store.load_services(&locale))
}

async fn get_lesson_previews(
    State(state): State<AppState>,
    query: LangQuery,
) -> Result<Json<Vec<LessonPreview>>, ApiError> {
    let locale = query.locale();
    let result = state.store.list_lesson_previews(&locale);
    respond(ContentKind::LessonPreviews, &locale, result)
}

async fn get_lesson_items(
    State(state): State<AppState>,
    query: LangQuery,
) -> Result<Json<Vec<LessonItem>>, ApiError> {
    let locale = query.locale();
    let result = state.store.list_lesson_items(&locale);
    respond(ContentKind::LessonItems, &locale, result)
}

// Pricing is not localized, so `lang` is not even parsed.
async fn get_pricing(State(state): State<AppState>) -> Result<Json<Vec<PricingPlan>>, ApiError> {
    respond(ContentKind::Pricing, &Locale::baseline(), state.store.load_pricing())
}

async fn get_testimonials(
    State(state): State<AppState>,
    query: LangQuery,
) -> Result<Json<Vec<Testimonial>>, ApiError> {
    let locale = query.locale();
    let result = state.store.load_testimonials(&locale);
    respond(ContentKind::Testimonials, &locale, result)
}

async fn get_faq(
    State(state): State<AppState>,
    query: LangQuery,
) -> Result<Json<Vec<FaqItem>>, ApiError> {
    let locale = query.locale();
    respond(ContentKind::Faq, &locale, state.store.load_faq(&locale))
}
