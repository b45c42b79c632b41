use std::sync::Arc;

use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use ordex_core::Engine;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

const MISSING_INPUT_ERROR: &str = "Missing products or text";
const MISSING_INPUT_REASON: &str = "Missing required input data";
const SERVER_ERROR_REASON: &str = "Server error occurred during processing";
const HOME_MESSAGE: &str = "Parser API is running. Send POST requests to /api/parser";

#[derive(Clone)]
struct AppState {
    engine: Arc<Engine>,
}

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub flag: u8,
    pub reason: String,
}

impl ErrorResponse {
    fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HomeResponse {
    pub message: String,
}

/// Routes for the parser API, sharing one engine across requests.
pub fn build_router(engine: Arc<Engine>) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/parser", post(parse))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { engine })
}

/// GET /
async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: HOME_MESSAGE.to_string(),
    })
}

/// POST /api/parser
async fn parse(
    State(state): State<AppState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Response {
    let request_id = Uuid::now_v7();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(%request_id, "Rejected parser request body: {}", rejection.body_text());
            return missing_input();
        }
    };

    if request.products.is_empty() || request.text.trim().is_empty() {
        warn!(%request_id, "Parser request without products or text");
        return missing_input();
    }

    let span = info_span!("parse", %request_id, products = request.products.len());
    async move {
        info!("Extracting order from {} bytes of text", request.text.len());

        let engine = Arc::clone(&state.engine);
        let current = tracing::Span::current();
        let outcome = tokio::task::spawn_blocking(move || {
            let _guard = current.enter();
            engine.extract(&request.products, &request.text)
        })
        .await;

        match outcome {
            Ok(Ok(result)) => {
                info!(flag = result.flag(), "Extraction finished");
                (StatusCode::OK, Json(result)).into_response()
            }
            Ok(Err(e)) if e.is_missing_input() => missing_input(),
            Ok(Err(e)) => {
                error!("Extraction failed: {e}");
                server_error(e.to_string())
            }
            Err(e) => {
                error!("Extraction task panicked: {e}");
                server_error(e.to_string())
            }
        }
    }
    .instrument(span)
    .await
}

fn missing_input() -> Response {
    ErrorResponse {
        error: MISSING_INPUT_ERROR.to_string(),
        flag: 1,
        reason: MISSING_INPUT_REASON.to_string(),
    }
    .into_response_with(StatusCode::BAD_REQUEST)
}

fn server_error(error: String) -> Response {
    ErrorResponse {
        error,
        flag: 1,
        reason: SERVER_ERROR_REASON.to_string(),
    }
    .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}
