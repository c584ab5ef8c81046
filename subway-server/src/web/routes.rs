//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path as UrlPath, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::domain::{LineId, StationId};
use crate::service::ServiceError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations).post(create_station))
        .route("/stations/:id", get(show_station).delete(delete_station))
        .route("/lines", get(list_lines).post(create_line))
        .route(
            "/lines/:id",
            get(show_line).put(update_line).delete(delete_line),
        )
        .route(
            "/lines/:id/sections",
            post(add_section).delete(remove_section),
        )
        .route("/paths", get(find_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn create_station(
    State(state): State<AppState>,
    Json(req): Json<CreateStationRequest>,
) -> Result<Response, AppError> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest {
            message: "station name must not be empty".to_string(),
        });
    }

    let station = state.subway.write().await.create_station(name);
    Ok((
        StatusCode::CREATED,
        Json(StationResponse::from_station(&station)),
    )
        .into_response())
}

async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResponse>> {
    let subway = state.subway.read().await;
    Json(
        subway
            .stations()
            .iter()
            .map(StationResponse::from_station)
            .collect(),
    )
}

async fn show_station(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<StationId>,
) -> Result<Json<StationResponse>, AppError> {
    let subway = state.subway.read().await;
    let station = subway.station(id).map_err(AppError::not_found)?;
    Ok(Json(StationResponse::from_station(&station)))
}

async fn delete_station(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<StationId>,
) -> Result<StatusCode, AppError> {
    state
        .subway
        .write()
        .await
        .delete_station(id)
        .map_err(AppError::not_found)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a line, optionally with its first section.
async fn create_line(
    State(state): State<AppState>,
    Json(req): Json<CreateLineRequest>,
) -> Result<Response, AppError> {
    let first = req.first_section().map_err(|message| AppError::BadRequest {
        message: message.to_string(),
    })?;

    let mut subway = state.subway.write().await;
    let id = subway.create_line(&req.name, &req.color, first)?;
    let line = subway.line(id)?;
    Ok((StatusCode::CREATED, Json(LineResponse::from_line(line))).into_response())
}

async fn list_lines(State(state): State<AppState>) -> Json<Vec<LineResponse>> {
    let subway = state.subway.read().await;
    Json(
        subway
            .lines()
            .into_iter()
            .map(LineResponse::from_line)
            .collect(),
    )
}

async fn show_line(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<LineId>,
) -> Result<Json<LineResponse>, AppError> {
    let subway = state.subway.read().await;
    Ok(Json(LineResponse::from_line(subway.line(id)?)))
}

async fn update_line(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<LineId>,
    Json(req): Json<UpdateLineRequest>,
) -> Result<Json<LineResponse>, AppError> {
    let mut subway = state.subway.write().await;
    subway.update_line(id, &req.name, &req.color)?;
    Ok(Json(LineResponse::from_line(subway.line(id)?)))
}

async fn delete_line(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<LineId>,
) -> Result<StatusCode, AppError> {
    state.subway.write().await.delete_line(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a section to a line, returning the updated line.
async fn add_section(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<LineId>,
    Json(req): Json<AddSectionRequest>,
) -> Result<Json<LineResponse>, AppError> {
    let mut subway = state.subway.write().await;
    subway.add_segment(id, req.up_station_id, req.down_station_id, req.distance)?;
    Ok(Json(LineResponse::from_line(subway.line(id)?)))
}

/// Remove a station from a line.
async fn remove_section(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<LineId>,
    Query(query): Query<RemoveSectionQuery>,
) -> Result<StatusCode, AppError> {
    state
        .subway
        .write()
        .await
        .remove_segment(id, query.station_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Find the shortest path between two stations.
///
/// Results are cached under the topology version they were computed
/// for, so any edit makes earlier entries unreachable.
async fn find_path(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Result<Json<PathResponse>, AppError> {
    let subway = state.subway.read().await;
    let version = subway.version();

    if let Some(path) = state.paths.get(version, query.source, query.target).await {
        debug!(source = %query.source, target = %query.target, version, "path cache hit");
        return Ok(Json(PathResponse::from_path(&path)));
    }

    let path = Arc::new(subway.find_shortest_path(query.source, query.target)?);
    state
        .paths
        .insert(version, query.source, query.target, Arc::clone(&path))
        .await;

    Ok(Json(PathResponse::from_path(&path)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl AppError {
    /// Map a service error where a missing station is the resource
    /// being addressed, rather than a bad reference in the request.
    fn not_found(e: ServiceError) -> Self {
        match e {
            ServiceError::StationNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            other => other.into(),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::LineNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            ServiceError::StationNotFound(_)
            | ServiceError::StationInUse { .. }
            | ServiceError::Topology(_)
            | ServiceError::Path(_) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, "{message}");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
