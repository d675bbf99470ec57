use crate::error::SearchError;
use crate::gateway::AirportDirectory;
use crate::models::{ErrorBody, SearchAirportRequest, SearchResponse};
use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{debug, error, info};

pub type SharedDirectory = Arc<dyn AirportDirectory>;

/// Build the proxy router: a single `POST /search-airport` route with
/// permissive CORS so a browser frontend on another origin can call it.
pub fn router(directory: SharedDirectory) -> Router {
    Router::new()
        .route("/search-airport", post(search_airport))
        .layer(CorsLayer::permissive())
        .with_state(directory)
}

/// Bind `addr` and serve the proxy until the process is stopped.
pub async fn run(addr: &str, directory: SharedDirectory) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(addr = %listener.local_addr()?, "airport search proxy listening");

    axum::serve(listener, router(directory))
        .await
        .context("server error")?;
    Ok(())
}

async fn search_airport(
    State(directory): State<SharedDirectory>,
    Json(body): Json<SearchAirportRequest>,
) -> Response {
    let Some(keyword) = body
        .airport
        .as_deref()
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
    else {
        let err = SearchError::Validation("the airport keyword".to_string());
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: err.to_string(),
            }),
        )
            .into_response();
    };

    match directory.search(keyword).await {
        Ok(data) => {
            debug!(keyword, count = data.len(), "search resolved");
            (StatusCode::OK, Json(SearchResponse { data })).into_response()
        }
        Err(err) => {
            // Full detail goes to the log; the client gets a generic message.
            error!(keyword, %err, "airport search failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "airport search failed".to_string(),
                }),
            )
                .into_response()
        }
    }
}
