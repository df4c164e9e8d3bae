use crate::analyzer::analyze;
use crate::error::{ApiError, ApiResult};
use crate::query::natural::parse_natural_language;
use crate::query::params::{build_filter, FilterParams};
use crate::query::StringFilter;
use crate::state::AppState;
use crate::store::StringRecord;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Response for filtered listings: the resolved filter is echoed back so
/// clients can see how their parameters were interpreted.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub count: usize,
    pub filters: StringFilter,
    pub results: Vec<StringRecord>,
}

/// Natural-language search parameters
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

/// Response for natural-language search, echoing both the raw query and the
/// filters parsed out of it.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub filters: StringFilter,
    pub count: usize,
    pub results: Vec<StringRecord>,
}

/// Analyze a string and store the result.
///
/// The body is validated explicitly rather than deserialized into a typed
/// struct so a missing or non-string `value` produces the service's own
/// `INVALID_INPUT` envelope. Equivalent content (same trimmed form, hence
/// same hash) is rejected with 409 and the existing record.
pub async fn create_string(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<impl IntoResponse> {
    let value = match body.get("value") {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(_) => {
            return Err(ApiError::InvalidInput(
                "\"value\" must be a string".to_string(),
            ))
        }
        None => {
            return Err(ApiError::InvalidInput(
                "missing required field \"value\"".to_string(),
            ))
        }
    };

    let properties = analyze(&value);
    let record = StringRecord::new(value, properties);
    let stored = state.store.create(record).await?;

    tracing::debug!(id = %stored.id, length = stored.properties.length, "Stored new analysis");
    Ok((StatusCode::CREATED, Json(stored)))
}

/// List stored analyses, optionally filtered by structured query parameters.
pub async fn list_strings(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> ApiResult<impl IntoResponse> {
    let filters = build_filter(&params)?;
    let results = state.store.find(&filters).await?;

    Ok(Json(ListResponse {
        count: results.len(),
        filters,
        results,
    }))
}

/// Filter stored analyses with a free-text natural-language query.
pub async fn search_strings(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<impl IntoResponse> {
    let filters = parse_natural_language(&params.query)?;
    let results = state.store.find(&filters).await?;

    Ok(Json(SearchResponse {
        query: params.query,
        filters,
        count: results.len(),
        results,
    }))
}

/// Fetch a single analysis by its exact original value.
pub async fn get_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> ApiResult<impl IntoResponse> {
    match state.store.find_by_value(&value).await? {
        Some(record) => Ok(Json(record)),
        None => Err(ApiError::NotFound),
    }
}

/// Delete a single analysis by its exact original value.
pub async fn delete_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> ApiResult<impl IntoResponse> {
    if state.store.delete_by_value(&value).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
