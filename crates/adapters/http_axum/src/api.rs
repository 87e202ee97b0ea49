//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use devicehub_app::ports::DeviceRepository;

use crate::state::AppState;

/// Build the `/v1` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: DeviceRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/ping", get(ping))
        .route(
            "/devices",
            get(devices::list::<R>).post(devices::create::<R>),
        )
        // Static segment, matched ahead of `{id}`.
        .route("/devices/search", get(devices::search::<R>))
        .route(
            "/devices/{id}",
            get(devices::get::<R>)
                .put(devices::update::<R>)
                .delete(devices::delete::<R>),
        )
}

/// Body of the liveness probe.
#[derive(Serialize)]
pub struct Pong {
    pub message: &'static str,
}

/// `GET /v1/ping`
pub async fn ping() -> Json<Pong> {
    Json(Pong { message: "pong" })
}
