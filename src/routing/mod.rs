//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at registration):
//!     (methods, pattern, handler)
//!     → pattern.rs (escape '/', ':name' → capture group, anchor, case-insensitive)
//!     → pattern.rs (param names)
//!     → matcher.rs (RouteMatcher, immutable regex)
//!
//! Incoming Request (method, path)
//!     → router.rs (scan routes in registration order)
//!     → matcher.rs (method membership, then path regex)
//!     → params.rs (captures bound to names)
//!     → Return: matched route + params, or no match
//! ```
//!
//! # Design Decisions
//! - Methods compare case-sensitively, paths case-insensitively
//! - Deterministic: same input always matches same route
//! - Matching never errors; a miss is an ordinary outcome

pub mod matcher;
pub mod params;
pub mod pattern;
pub mod router;

pub use matcher::{MatchOutcome, Methods, RouteMatcher};
pub use params::Params;
pub use router::{RouteLookup, Router};
