//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (YAML/TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//!     → endpoints handed to the scheduler once, before the first pass
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields except an endpoint's url have defaults
//! - A YAML file may be a bare endpoint list
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    CheckConfig, EndpointConfig, LogFormat, MonitorConfig, ObservabilityConfig, ReportConfig,
    ReportSink, ScheduleConfig,
};
pub use validation::{validate_config, ValidationError};
