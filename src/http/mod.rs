//! HTTP transport for a player store. Requires the `http` feature.
//!
//! ## Routes
//!
//! - `GET /league` — the league as JSON, in the persisted document shape.
//! - `GET /players/:name` — the player's score as plain text; 404 if unknown.
//! - `POST /players/:name` — record a win; 202 on success.
//!
//! ## Example
//!
//! ```ignore
//! use player_league::{http, InMemoryPlayerStore};
//!
//! let app = http::router(InMemoryPlayerStore::new());
//! // or serve directly
//! http::serve(FileSystemPlayerStore::open("game.db.json")?, "0.0.0.0:5000").await?;
//! ```

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::store::{PlayerStore, StoreError};

/// Build an axum `Router` serving the league routes from `store`.
pub fn router<S: PlayerStore + 'static>(store: S) -> Router {
    Router::new()
        .route("/league", get(league_handler::<S>))
        .route(
            "/players/:name",
            get(score_handler::<S>).post(record_win_handler::<S>),
        )
        .with_state(Arc::new(store))
}

/// Serve `store` over HTTP at the given address (e.g. `"0.0.0.0:5000"`).
pub async fn serve<S: PlayerStore + 'static>(store: S, addr: &str) -> Result<(), std::io::Error> {
    let app = router(store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("league server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await
}

/// `GET /league`
async fn league_handler<S: PlayerStore + 'static>(State(store): State<Arc<S>>) -> Response {
    Json(store.league()).into_response()
}

/// `GET /players/:name` — a zero score means the player is not present.
async fn score_handler<S: PlayerStore + 'static>(
    State(store): State<Arc<S>>,
    Path(name): Path<String>,
) -> Response {
    let score = store.player_score(&name);
    let status = if score == 0 {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    (status, score.to_string()).into_response()
}

/// `POST /players/:name`
///
/// The write runs on the blocking pool. Once spawned it completes even if
/// the client goes away, so a persist is never cut off mid-write.
async fn record_win_handler<S: PlayerStore + 'static>(
    State(store): State<Arc<S>>,
    Path(name): Path<String>,
) -> Response {
    let result = tokio::task::spawn_blocking(move || store.record_win(&name)).await;
    match result {
        Ok(Ok(())) => StatusCode::ACCEPTED.into_response(),
        Ok(Err(err)) => error_response(&err),
        Err(join_err) => {
            log::error!("record win task failed: {}", join_err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": join_err.to_string() })),
            )
                .into_response()
        }
    }
}

fn error_response(err: &StoreError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
