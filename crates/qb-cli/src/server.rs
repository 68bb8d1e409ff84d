//! Read-only HTTP query API over the catalog.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use qb_core::{
    Author, AuthorSortKey, Catalog, Category, CategorySortKey, Direction, MonthDay, Quote,
    QuoteFilter, QuoteSortKey, authors_born_on, catalog_stats, daily_quote, featured_quotes,
    filter_authors, filter_categories, most_popular_category, random_quote, search_quotes,
    sort_authors, sort_categories, sort_quotes, today_utc, top_categories,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
}

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

type ApiResult = Result<Response, ApiError>;

// --- Response views ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteView<'a> {
    #[serde(flatten)]
    quote: &'a Quote,
    author_name: Option<&'a str>,
    category_name: Option<&'a str>,
}

impl<'a> QuoteView<'a> {
    fn new(catalog: &'a Catalog, quote: &'a Quote) -> Self {
        Self {
            quote,
            author_name: catalog.author_name(quote),
            category_name: catalog
                .find_category(&quote.category_id)
                .map(|c| c.name.as_str()),
        }
    }
}

fn quote_views<'a>(catalog: &'a Catalog, quotes: &[&'a Quote]) -> Vec<QuoteView<'a>> {
    quotes.iter().map(|q| QuoteView::new(catalog, q)).collect()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthorView<'a> {
    #[serde(flatten)]
    author: &'a Author,
    quote_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    age: Option<u32>,
}

impl<'a> AuthorView<'a> {
    fn new(catalog: &Catalog, author: &'a Author) -> Self {
        Self {
            author,
            quote_count: catalog.count_by_author(&author.id),
            age: author.age_on(&today_utc()),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryView<'a> {
    #[serde(flatten)]
    category: &'a Category,
    quote_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse<'a> {
    query: &'a str,
    total: usize,
    count: usize,
    sort: QuoteSortKey,
    order: Direction,
    quotes: Vec<QuoteView<'a>>,
}

// --- Query parameters ---

#[derive(Debug, Default, Deserialize)]
struct QuoteParams {
    query: Option<String>,
    category: Option<String>,
    author: Option<String>,
    sort: Option<String>,
    order: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ListParams {
    filter: Option<String>,
    sort: Option<String>,
    order: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RandomParams {
    exclude: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct BirthdayParams {
    date: Option<String>,
}

fn parse_param<T>(value: Option<&str>, default: T) -> Result<T, ApiError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value.filter(|v| !v.is_empty()) {
        Some(v) => v.parse().map_err(|e: T::Err| ApiError::BadRequest(e.to_string())),
        None => Ok(default),
    }
}

// --- Handlers ---

async fn list_quotes(State(state): State<AppState>, Query(params): Query<QuoteParams>) -> ApiResult {
    let catalog = &*state.catalog;
    let sort = parse_param(params.sort.as_deref(), QuoteSortKey::Relevance)?;
    let order = parse_param(params.order.as_deref(), Direction::Descending)?;
    let query = params.query.unwrap_or_default();
    let filter = QuoteFilter::from_selection(params.category.as_deref(), params.author.as_deref());

    let hits = search_quotes(catalog, &query);
    let narrowed = filter.apply(&hits);
    let sorted = sort_quotes(catalog, &narrowed, sort, order, &query);
    tracing::debug!("query {query:?}: {} hits, {} after filter", hits.len(), sorted.len());

    Ok(Json(SearchResponse {
        query: &query,
        total: hits.len(),
        count: sorted.len(),
        sort,
        order,
        quotes: quote_views(catalog, &sorted),
    })
    .into_response())
}

async fn get_daily(State(state): State<AppState>) -> ApiResult {
    let catalog = &*state.catalog;
    let quote = daily_quote(catalog).ok_or_else(|| ApiError::NotFound("no daily quote".into()))?;
    Ok(Json(QuoteView::new(catalog, quote)).into_response())
}

async fn get_featured(State(state): State<AppState>) -> ApiResult {
    let catalog = &*state.catalog;
    Ok(Json(quote_views(catalog, &featured_quotes(catalog))).into_response())
}

async fn get_random(State(state): State<AppState>, Query(params): Query<RandomParams>) -> ApiResult {
    let catalog = &*state.catalog;
    let mut rng = SmallRng::from_os_rng();
    let quote = random_quote(catalog, &mut rng, params.exclude.as_deref())
        .ok_or_else(|| ApiError::NotFound("no quotes available".into()))?;
    Ok(Json(QuoteView::new(catalog, quote)).into_response())
}

async fn get_quote(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let catalog = &*state.catalog;
    let quote = catalog
        .find_quote(&id)
        .ok_or_else(|| ApiError::NotFound(format!("quote not found: {id}")))?;
    Ok(Json(QuoteView::new(catalog, quote)).into_response())
}

async fn list_authors(State(state): State<AppState>, Query(params): Query<ListParams>) -> ApiResult {
    let catalog = &*state.catalog;
    let sort = parse_param(params.sort.as_deref(), AuthorSortKey::Name)?;
    let order = parse_param(params.order.as_deref(), Direction::Ascending)?;
    let matches = filter_authors(catalog, params.filter.as_deref().unwrap_or(""));
    let views: Vec<AuthorView> = sort_authors(&matches, sort, order)
        .into_iter()
        .map(|a| AuthorView::new(catalog, a))
        .collect();
    Ok(Json(views).into_response())
}

fn find_author<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Author, ApiError> {
    catalog
        .find_author(id)
        .ok_or_else(|| ApiError::NotFound(format!("author not found: {id}")))
}

async fn get_author(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let catalog = &*state.catalog;
    let author = find_author(catalog, &id)?;
    Ok(Json(AuthorView::new(catalog, author)).into_response())
}

async fn get_author_quotes(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let catalog = &*state.catalog;
    let author = find_author(catalog, &id)?;
    Ok(Json(quote_views(catalog, &catalog.quotes_by_author(&author.id))).into_response())
}

async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult {
    let catalog = &*state.catalog;
    let sort = parse_param(params.sort.as_deref(), CategorySortKey::Name)?;
    let default_order = match sort {
        CategorySortKey::Quotes => Direction::Descending,
        CategorySortKey::Name => Direction::Ascending,
    };
    let order = parse_param(params.order.as_deref(), default_order)?;
    let matches = filter_categories(catalog, params.filter.as_deref().unwrap_or(""));
    let views: Vec<CategoryView> = sort_categories(catalog, &matches, sort, order)
        .into_iter()
        .map(|c| CategoryView {
            category: c,
            quote_count: catalog.count_by_category(&c.id),
        })
        .collect();
    Ok(Json(views).into_response())
}

fn find_category<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Category, ApiError> {
    catalog
        .find_category(id)
        .ok_or_else(|| ApiError::NotFound(format!("category not found: {id}")))
}

async fn get_category(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let catalog = &*state.catalog;
    let category = find_category(catalog, &id)?;
    Ok(Json(CategoryView {
        category,
        quote_count: catalog.count_by_category(&category.id),
    })
    .into_response())
}

async fn get_category_quotes(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let catalog = &*state.catalog;
    let category = find_category(catalog, &id)?;
    Ok(Json(quote_views(catalog, &catalog.quotes_by_category(&category.id))).into_response())
}

async fn get_birthdays(
    State(state): State<AppState>,
    Query(params): Query<BirthdayParams>,
) -> ApiResult {
    let catalog = &*state.catalog;
    let target = parse_param(params.date.as_deref(), today_utc().month_day())?;
    let views: Vec<AuthorView> = authors_born_on(catalog, target)
        .into_iter()
        .map(|a| AuthorView::new(catalog, a))
        .collect();
    Ok(Json(serde_json::json!({ "date": target.to_string(), "authors": views })).into_response())
}

async fn get_stats(State(state): State<AppState>) -> ApiResult {
    let catalog = &*state.catalog;
    Ok(Json(serde_json::json!({
        "stats": catalog_stats(catalog),
        "mostPopularCategory": most_popular_category(catalog).map(|c| c.id.as_str()),
        "topCategories": top_categories(catalog, 3)
            .into_iter()
            .map(|(category, quote_count)| CategoryView { category, quote_count })
            .collect::<Vec<_>>(),
    }))
    .into_response())
}

pub fn router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/quotes", get(list_quotes))
        .route("/quotes/daily", get(get_daily))
        .route("/quotes/featured", get(get_featured))
        .route("/quotes/random", get(get_random))
        .route("/quotes/{id}", get(get_quote))
        .route("/authors", get(list_authors))
        .route("/authors/{id}", get(get_author))
        .route("/authors/{id}/quotes", get(get_author_quotes))
        .route("/categories", get(list_categories))
        .route("/categories/{id}", get(get_category))
        .route("/categories/{id}/quotes", get(get_category_quotes))
        .route("/birthdays", get(get_birthdays))
        .route("/stats", get(get_stats))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { catalog })
}

/// Serve until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    catalog: Arc<Catalog>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    axum::serve(listener, router(catalog))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
