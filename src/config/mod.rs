//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouteFileConfig (validated, immutable)
//!     → Router::from_config
//! ```
//!
//! # Design Decisions
//! - All sections have defaults to allow minimal files
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{LogFormat, MethodList, ObservabilityConfig, RouteConfig, RouteFileConfig};
pub use validation::{validate_config, ValidationError};
