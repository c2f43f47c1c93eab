//! Route lookup.
//!
//! # Responsibilities
//! - Store compiled routes in registration order
//! - Look up the first route matching a request
//! - Return matched route + params or explicit no-match
//!
//! # Design Decisions
//! - Immutable lookups (`&self`), safe to share behind an `Arc`
//! - O(n) scan; first registered match wins, no priority sorting
//! - Handlers from a route file are the route names

use crate::config::RouteFileConfig;
use crate::routing::matcher::{MatchOutcome, Methods, RouteMatcher};
use crate::routing::params::Params;

/// A successful lookup.
#[derive(Debug)]
pub struct RouteLookup<'a, H> {
    /// The route that matched.
    pub route: &'a RouteMatcher<H>,
    /// Params extracted for this request.
    pub params: Params,
}

impl<'a, H> RouteLookup<'a, H> {
    pub fn handler(&self) -> &'a H {
        self.route.handler()
    }
}

/// Ordered collection of routes.
#[derive(Debug, Clone)]
pub struct Router<H> {
    routes: Vec<RouteMatcher<H>>,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<H> Router<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route. Routes are tried in the order they were added.
    pub fn add(&mut self, methods: impl Into<Methods>, pattern: impl Into<String>, handler: H) -> &mut Self {
        self.routes.push(RouteMatcher::new(methods, pattern, handler));
        self
    }

    /// Find the first route accepting `method` and `path`.
    pub fn lookup(&self, method: &str, path: &str) -> Option<RouteLookup<'_, H>> {
        let found = self.routes.iter().find_map(|route| match route.find(method, path) {
            MatchOutcome::Matched(params) => Some(RouteLookup { route, params }),
            _ => None,
        });

        match &found {
            Some(hit) => tracing::debug!(
                method = %method,
                path = %path,
                pattern = %hit.route.pattern(),
                params = hit.params.len(),
                "Route matched"
            ),
            None => tracing::debug!(method = %method, path = %path, "No route matched"),
        }
        found
    }

    /// True if some route's pattern fits `path`, whatever its methods.
    pub fn path_exists(&self, path: &str) -> bool {
        self.routes.iter().any(|route| route.matches_path(path))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteMatcher<H>> {
        self.routes.iter()
    }
}

impl Router<String> {
    /// Build a router from a route file. Each route's handler is its name.
    pub fn from_config(config: &RouteFileConfig) -> Self {
        let mut router = Router::new();
        for route in &config.routes {
            router.add(route.methods.to_vec(), route.pattern.as_str(), route.name.clone());
        }
        tracing::info!(routes = router.len(), "Router built");
        router
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_registered_match_wins() {
        let mut router = Router::new();
        router
            .add("GET", "/users/:id/posts/:postId", "post")
            .add("GET", "/users/:name/posts/:slug", "shadowed");

        let hit = router.lookup("GET", "/users/42/posts/7").unwrap();
        assert_eq!(*hit.handler(), "post");
        assert_eq!(hit.params.get("id"), Some("42"));
        assert_eq!(hit.params.get("slug"), None);
    }

    #[test]
    fn test_method_selects_route() {
        let mut router = Router::new();
        router
            .add("GET", "/items", "list")
            .add(["POST", "PUT"], "/items", "write");

        assert_eq!(*router.lookup("PUT", "/items").unwrap().handler(), "write");
        assert_eq!(*router.lookup("GET", "/items").unwrap().handler(), "list");
        assert!(router.lookup("DELETE", "/items").is_none());
        assert!(router.path_exists("/items"));
        assert!(!router.path_exists("/nothing"));
    }

    #[test]
    fn test_empty_router() {
        let router: Router<()> = Router::new();
        assert!(router.is_empty());
        assert!(router.lookup("GET", "/").is_none());
    }
}
