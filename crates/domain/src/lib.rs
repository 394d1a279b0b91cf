//! # simmose-domain
//!
//! Pure domain model for the simmose monitoring server.
//!
//! ## Responsibilities
//! - Define the closed set of **sensor kinds** a device can report
//! - Define **readings** and the all-sensor **snapshot** served to clients
//! - Define the error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod sensor;
