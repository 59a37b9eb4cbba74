//! Route handlers.
//!
//! Every posts handler evaluates the `error_scenario` directive first, before
//! the path or body are looked at, so a forced outcome never depends on the
//! request being well formed and never touches the repository.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::post::{NewPost, Post, PostId, PostPatch};
use crate::repository::PostRepository;
use crate::scenario::ScenarioQuery;

use super::error::ApiError;
use super::AppState;

/// Raw query pairs; decoded into a [`ScenarioQuery`] by hand so a repeated
/// `error_scenario` keeps its last value instead of being rejected.
type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

type IdSegment = Result<Path<String>, PathRejection>;

fn scenario_from(query: QueryPairs) -> Result<ScenarioQuery, ApiError> {
    let Query(pairs) = query?;
    Ok(ScenarioQuery::from_pairs(pairs))
}

/// Resolve the `:id` segment. A well-formed integer that cannot name a
/// stored post (negative, or past the id range) is a missing post; only a
/// non-integer segment is a validation failure.
fn post_id(path: IdSegment) -> Result<PostId, ApiError> {
    let Path(raw) = path?;
    if let Ok(id) = raw.parse::<PostId>() {
        return Ok(id);
    }
    if let Ok(n) = raw.parse::<i128>() {
        return Err(ApiError::NotFound(n.to_string()));
    }
    let digits = raw.strip_prefix(&['+', '-'][..]).unwrap_or(&raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::NotFound(raw));
    }
    Err(ApiError::Validation(format!(
        "Invalid post id {raw:?}: expected an integer"
    )))
}

/// `GET /health`
pub(crate) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /posts`
pub(crate) async fn list_posts<R: PostRepository + 'static>(
    State(state): State<AppState<R>>,
    query: QueryPairs,
) -> Result<Json<Vec<Post>>, ApiError> {
    state.intercept(&scenario_from(query)?).await?;
    Ok(Json(state.repo().list()?))
}

/// `GET /posts/:id`
pub(crate) async fn get_post<R: PostRepository + 'static>(
    State(state): State<AppState<R>>,
    query: QueryPairs,
    path: IdSegment,
) -> Result<Json<Post>, ApiError> {
    state.intercept(&scenario_from(query)?).await?;
    let id = post_id(path)?;
    Ok(Json(state.repo().get(id)?))
}

/// `POST /posts`
pub(crate) async fn create_post<R: PostRepository + 'static>(
    State(state): State<AppState<R>>,
    query: QueryPairs,
    payload: Result<Json<NewPost>, JsonRejection>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    state.intercept(&scenario_from(query)?).await?;
    let Json(new_post) = payload?;
    new_post.validate()?;
    let post = state.repo().create(new_post)?;
    debug!(id = post.id, "post created");
    Ok((StatusCode::CREATED, Json(post)))
}

/// `PUT /posts/:id`
pub(crate) async fn update_post<R: PostRepository + 'static>(
    State(state): State<AppState<R>>,
    query: QueryPairs,
    path: IdSegment,
    payload: Result<Json<PostPatch>, JsonRejection>,
) -> Result<Json<Post>, ApiError> {
    state.intercept(&scenario_from(query)?).await?;
    let id = post_id(path)?;
    let Json(patch) = payload?;
    patch.validate()?;
    let post = state.repo().update(id, patch)?;
    debug!(id, "post updated");
    Ok(Json(post))
}

/// `DELETE /posts/:id`
pub(crate) async fn delete_post<R: PostRepository + 'static>(
    State(state): State<AppState<R>>,
    query: QueryPairs,
    path: IdSegment,
) -> Result<StatusCode, ApiError> {
    state.intercept(&scenario_from(query)?).await?;
    let id = post_id(path)?;
    state.repo().delete(id)?;
    debug!(id, "post deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /echo` — returns `{"echoed": <body>}` for any JSON object body.
pub(crate) async fn echo(
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    Ok(Json(json!({ "echoed": body })))
}
