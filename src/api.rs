use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

use crate::assistant::AssistantError;
use crate::pipeline::{self, MetadataRequest};
use crate::AppState;
use crate::TARGET_WEB_REQUEST;

/// Query-string parameters for the metadata endpoint.
#[derive(Debug, Deserialize)]
struct AccessParams {
    key: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("access key missing or mismatched")]
    Forbidden,
    #[error("invalid request body: {0}")]
    BadRequest(#[from] serde_json::Error),
    #[error(transparent)]
    Assistant(#[from] AssistantError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Forbidden => StatusCode::FORBIDDEN.into_response(),
            ApiError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            ApiError::Assistant(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}

/// Builds the application router: the metadata endpoint on `/` (GET and
/// POST), a health endpoint on `/status`, and a permissive CORS layer
/// exposing `Content-Type`.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(generate_metadata).post(generate_metadata))
        .route("/status", get(status_check))
        .layer(cors)
        .with_state(state)
}

/// Binds and serves the API until the process exits.
pub async fn serve(state: AppState) -> Result<()> {
    let app = router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = format!("0.0.0.0:{}", port);

    let listener = TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// The metadata endpoint: access-key check, body parse, then the two-stage
/// assistant pipeline. The body is captured once up front so the failure
/// branch can log it without a second read.
async fn generate_metadata(
    State(state): State<AppState>,
    Query(params): Query<AccessParams>,
    body: String,
) -> Result<Json<Value>, ApiError> {
    if params.key.as_deref() != Some(state.config.access_key.as_str()) {
        warn!(target: TARGET_WEB_REQUEST, "Rejected request with missing or mismatched access key");
        return Err(ApiError::Forbidden);
    }

    let request: MetadataRequest = serde_json::from_str(&body)?;
    info!(
        target: TARGET_WEB_REQUEST,
        "Handling metadata request with {} characters of article text",
        request.article_text.len()
    );

    match pipeline::generate_metadata(&state, &request).await {
        Ok(task_response) => Ok(Json(json!({ "task_response": task_response }))),
        Err(err) => {
            error!(
                target: TARGET_WEB_REQUEST,
                "Metadata pipeline failed: {}. Request body: {}", err, body
            );
            Err(ApiError::Assistant(err))
        }
    }
}

/// Health endpoint: replies with "OK".
async fn status_check() -> &'static str {
    "OK"
}
