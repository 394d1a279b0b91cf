//! # simmose-adapter-memory
//!
//! Process-lifetime storage adapter keeping readings in a map.
//!
//! ## Responsibilities
//! - Implement the `SensorRepository` port defined in `simmose-app::ports::storage`
//! - Start every declared sensor at `0` so reads never miss in the default setup
//!
//! ## Dependency rule
//! Depends on `simmose-app` (for port traits) and `simmose-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod sensor_repo;

pub use sensor_repo::InMemorySensorRepository;
