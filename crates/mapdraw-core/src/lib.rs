//! Interactive drawing on top of the shape validator.
//!
//! - [`DrawSession`]: turns pointer events into completed point sequences
//! - [`DrawEngine`]: session + validator + store; one call per pointer event
//! - [`SharedFeatureStore`]: mutex-serialized store for several clients
//! - [`EngineConfig`]: limits and tolerance, loadable from TOML
//! - [`export`]: GeoJSON output of committed shapes

#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod session;
pub mod store;

pub use config::EngineConfig;
pub use engine::{DrawEngine, DrawOutcome, commit_input};
pub use error::{ConfigError, ExportError};
pub use mapdraw_model::InMemoryFeatureStore;
pub use session::{DrawInput, DrawSession, SessionState};
pub use store::SharedFeatureStore;
