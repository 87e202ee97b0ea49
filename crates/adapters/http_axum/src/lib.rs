//! # devicehub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **versioned JSON API** under `/v1`
//!   (`/v1/ping`, `/v1/devices`, `/v1/devices/{id}`, `/v1/devices/search`)
//! - Reject malformed identifiers, bodies and queries with `400` before the
//!   application service is ever invoked
//! - Map application results into HTTP responses and domain errors into
//!   status codes with a `{"error": "..."}` body
//!
//! ## Dependency rule
//! Depends on `devicehub-app` (for port traits and services) and `devicehub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
