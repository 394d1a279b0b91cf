//! # simmose-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement:
//!   - `SensorRepository` — write and read the latest reading per sensor
//! - Define the **driving/inbound** use-case struct:
//!   - `SensorService` — update a reading, retrieve one, snapshot all
//! - Orchestrate domain objects without knowing *how* readings are stored
//!
//! ## Dependency rule
//! Depends on `simmose-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
