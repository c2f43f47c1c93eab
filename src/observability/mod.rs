//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing + config produce:
//!     → tracing events (route compiled, lookup hit/miss, pattern fallback)
//!
//! logging.rs installs:
//!     → EnvFilter (RUST_LOG or configured level)
//!     → fmt layer (pretty or JSON) on stderr
//! ```

pub mod logging;

pub use logging::init_logging;
