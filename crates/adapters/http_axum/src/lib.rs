//! # simmose-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **device-facing** routes hardware uses to push readings
//!   (`PUT /api/hardware/temperature`, `PUT /api/hardware/pressure`)
//! - Serve the **client-facing** route returning every reading at once
//!   (`GET /api/webclient/sensor`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Classify application errors into HTTP status codes
//!
//! ## Dependency rule
//! Depends on `simmose-app` (for port traits and services) and `simmose-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
