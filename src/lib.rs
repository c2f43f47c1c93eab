//! Route matching for HTTP-style requests.
//!
//! A [`RouteMatcher`] is built once from a set of methods, a path pattern
//! such as `/users/:id/posts/:postId`, and an opaque handler. Each request
//! is then tested by method and path; a match yields the path params.
//!
//! ```
//! use route_matcher::RouteMatcher;
//!
//! let route = RouteMatcher::new("GET", "/users/:id/posts/:postId", "show_post");
//! let params = route.find("GET", "/users/42/posts/7").into_params().unwrap();
//! assert_eq!(params.get("id"), Some("42"));
//! assert_eq!(params.get("postId"), Some("7"));
//! ```

pub mod config;
pub mod observability;
pub mod routing;

pub use config::RouteFileConfig;
pub use routing::{MatchOutcome, Methods, Params, RouteLookup, RouteMatcher, Router};
