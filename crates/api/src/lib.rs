//! HTTP surface for the medassist health-information service.
//!
//! A thin axum layer over the [`orchestrator`] pipeline: each handler
//! decodes its request and hands it straight to the pipeline. Every
//! decision with control flow in it (rate limiting, validation,
//! translation, the assistant protocol) lives in the library crates, so
//! the handlers stay one call deep. Exposed as a library so integration
//! tests can drive the router without binding a socket.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
