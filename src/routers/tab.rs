use axum::{
    Json,
    extract::{Path, Query, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use super::{AppState, error_response};
use crate::controllers::parse_tab_url;
use crate::models::tab::SearchResponse;

const MISSING_QUERY: &str = "Missing query parameter 'q'";
const SEARCH_FAILED: &str = "Failed to search Ultimate Guitar";
const INVALID_TAB_ID: &str = "Invalid tab ID";
const FETCH_FAILED: &str = "Failed to fetch tab";
const MISSING_URL: &str = "Missing query parameter 'url'";
const INVALID_URL: &str = "Invalid Ultimate Guitar URL";

/// First value for `key`, if it is non-empty. Later repeats are ignored.
fn non_empty<'a>(queries: &'a [(String, String)], key: &str) -> Option<&'a str> {
    queries
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .filter(|v| !v.is_empty())
}

/// GET /search?q= - Search chord sheets upstream
pub async fn search_route(
    State(state): State<AppState>,
    Query(queries): Query<Vec<(String, String)>>,
) -> Response {
    let Some(search_q) = non_empty(&queries, "q") else {
        return error_response(StatusCode::BAD_REQUEST, MISSING_QUERY);
    };

    match state.tabs.search(search_q).await {
        Ok(results) => (StatusCode::OK, Json(SearchResponse { results })).into_response(),
        Err(e) => {
            error!(query = %search_q, "Search error: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, SEARCH_FAILED)
        }
    }
}

/// GET /tab/{id} - Fetch one tab by id
pub async fn tab_route(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let Some(id) = path.ok().and_then(|Path(raw)| raw.parse::<i64>().ok()) else {
        return error_response(StatusCode::BAD_REQUEST, INVALID_TAB_ID);
    };

    match state.tabs.fetch_tab(id).await {
        Ok(tab) => (StatusCode::OK, Json(tab)).into_response(),
        Err(e) => {
            error!(id, "Fetch error: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED)
        }
    }
}

/// GET /tab/ - An empty id is still an invalid id
pub async fn missing_tab_id_route() -> Response {
    error_response(StatusCode::BAD_REQUEST, INVALID_TAB_ID)
}

/// GET /resolve?url= - Read tab metadata out of a page link, no upstream call
pub async fn resolve_route(Query(queries): Query<Vec<(String, String)>>) -> Response {
    let Some(link) = non_empty(&queries, "url") else {
        return error_response(StatusCode::BAD_REQUEST, MISSING_URL);
    };

    match parse_tab_url(link) {
        Some(meta) => (StatusCode::OK, Json(meta)).into_response(),
        None => error_response(StatusCode::BAD_REQUEST, INVALID_URL),
    }
}
