//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Multipart, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::config::EmpirePlanFile;
use crate::domain::EmpirePlan;
use crate::planner::{Planner, SearchError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/travel", post(evaluate_travel))
        .route("/travel/upload", post(upload_travel))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound {
        message: format!("No route for {uri}"),
    }
}

/// Evaluate an empire plan sent as a JSON body.
async fn evaluate_travel(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TravelReportResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let plan = parse_plan(&body)?;
    run(state, plan).await
}

/// Evaluate an empire plan uploaded as the first field of a multipart form.
async fn upload_travel(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<TravelReportResponse>, AppError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest {
            message: format!("Invalid upload: {e}"),
        })?
        .ok_or_else(|| AppError::BadRequest {
            message: "No empire plan uploaded".to_string(),
        })?;

    debug!(name = ?field.name(), file = ?field.file_name(), "received empire plan upload");

    let body = field.bytes().await.map_err(|e| AppError::BadRequest {
        message: format!("Invalid upload: {e}"),
    })?;

    let plan = parse_plan(&body)?;
    run(state, plan).await
}

fn parse_plan(body: &[u8]) -> Result<EmpirePlan, AppError> {
    let file = EmpirePlanFile::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "rejected empire plan");
        AppError::BadRequest {
            message: e.to_string(),
        }
    })?;

    file.resolve().map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })
}

/// Run the planner off the async runtime.
async fn run(state: AppState, plan: EmpirePlan) -> Result<Json<TravelReportResponse>, AppError> {
    let report = tokio::task::spawn_blocking(move || {
        Planner::new(state.routes.as_ref(), &state.config).evaluate(&plan)
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("Planner task failed: {e}"),
    })??;

    info!(
        feasible = report.feasible,
        best_odds = report.best_odds,
        "travel evaluated"
    );

    Ok(Json(TravelReportResponse::from_report(&report)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Unprocessable { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidGraph(_) | SearchError::EmptyCandidateSet { .. } => {
                AppError::Unprocessable {
                    message: e.to_string(),
                }
            }
            SearchError::UnknownLocation(_) | SearchError::RouteSource(_) => AppError::Internal {
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
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
