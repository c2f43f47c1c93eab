//! Route matching logic.
//!
//! # Responsibilities
//! - Hold one compiled route: methods, pattern, regex, param names, handler
//! - Match method by exact membership (case-sensitive)
//! - Match path against the compiled regex (full string, case-insensitive)
//! - Extract captured segments into named params
//!
//! # Design Decisions
//! - Regex compiled once at construction, never recomputed
//! - `find` is the primary query: takes `&self` and returns its own params
//! - `match_request` keeps the single-slot result cache (`last_params`) for
//!   callers written against that contract; it takes `&mut self` so calls on
//!   one instance cannot interleave

use regex::Regex;

use crate::routing::params::Params;
use crate::routing::pattern;

/// Method tokens a route accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Methods(Vec<String>);

impl Methods {
    /// Exact, case-sensitive membership.
    pub fn contains(&self, method: &str) -> bool {
        self.0.iter().any(|m| m == method)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for Methods {
    fn from(method: &str) -> Self {
        Self(vec![method.to_string()])
    }
}

impl From<String> for Methods {
    fn from(method: String) -> Self {
        Self(vec![method])
    }
}

impl From<Vec<String>> for Methods {
    fn from(methods: Vec<String>) -> Self {
        Self(methods)
    }
}

impl From<Vec<&str>> for Methods {
    fn from(methods: Vec<&str>) -> Self {
        Self(methods.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Methods {
    fn from(methods: &[&str]) -> Self {
        Self(methods.iter().map(|m| m.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Methods {
    fn from(methods: [&str; N]) -> Self {
        Self(methods.iter().map(|m| m.to_string()).collect())
    }
}

/// Result of querying a route with [`RouteMatcher::find`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Method and path matched.
    Matched(Params),
    /// The method is not one of the route's methods. The path was not tested.
    MethodNotAllowed,
    /// The method is allowed but the path does not fit the pattern.
    PathMismatch,
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }

    /// Params of a successful match.
    pub fn params(&self) -> Option<&Params> {
        match self {
            MatchOutcome::Matched(params) => Some(params),
            _ => None,
        }
    }

    pub fn into_params(self) -> Option<Params> {
        match self {
            MatchOutcome::Matched(params) => Some(params),
            _ => None,
        }
    }
}

/// One compiled route.
#[derive(Debug, Clone)]
pub struct RouteMatcher<H> {
    methods: Methods,
    pattern: String,
    param_names: Vec<String>,
    regex: Regex,
    handler: H,
    // Single-slot cache written by `match_request`.
    captures: Vec<Option<String>>,
    last_params: Params,
}

impl<H> RouteMatcher<H> {
    /// Compile a route for `pattern` accepting `methods`.
    ///
    /// `methods` may be a single token or a list. Construction never fails;
    /// see [`pattern::compile`] for how unusual patterns are treated.
    pub fn new(methods: impl Into<Methods>, pattern: impl Into<String>, handler: H) -> Self {
        let pattern = pattern.into();
        let compiled = pattern::compile(&pattern);
        let param_names = pattern::param_names(&pattern);

        tracing::debug!(
            pattern = %pattern,
            regex = %compiled.regex().as_str(),
            params = ?param_names,
            "Route compiled"
        );

        Self {
            methods: methods.into(),
            param_names,
            regex: compiled.into_regex(),
            pattern,
            handler,
            captures: Vec::new(),
            last_params: Params::new(),
        }
    }

    pub fn methods(&self) -> &Methods {
        &self.methods
    }

    /// The pattern exactly as supplied.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Names bound on a match, in pattern order.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Source of the compiled path regex.
    pub fn regex_source(&self) -> &str {
        self.regex.as_str()
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn allows_method(&self, method: &str) -> bool {
        self.methods.contains(method)
    }

    /// Path test alone, ignoring methods.
    pub fn matches_path(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Params cached by the last successful [`match_request`](Self::match_request).
    pub fn last_params(&self) -> &Params {
        &self.last_params
    }

    /// Test `method` and `path` without touching any state.
    ///
    /// On success every capture of this call is bound to its name, so the
    /// result never carries values from an earlier request.
    pub fn find(&self, method: &str, path: &str) -> MatchOutcome {
        if !self.methods.contains(method) {
            return MatchOutcome::MethodNotAllowed;
        }

        let Some(caps) = self.regex.captures(path) else {
            return MatchOutcome::PathMismatch;
        };

        let params = self
            .param_names
            .iter()
            .enumerate()
            .filter_map(|(i, name)| caps.get(i + 1).map(|m| (name.as_str(), m.as_str())))
            .collect();

        MatchOutcome::Matched(params)
    }

    /// Test `method` and `path`, caching params on the matcher.
    ///
    /// Returns `true` on match and writes the captured values into
    /// [`last_params`](Self::last_params). A failed call changes nothing, so
    /// the previous result stays visible. Captures are only replaced when the
    /// regex has more than one group; a single-group match reuses whatever
    /// the buffer already holds.
    pub fn match_request(&mut self, method: &str, path: &str) -> bool {
        if !self.methods.contains(method) {
            return false;
        }

        let Some(caps) = self.regex.captures(path) else {
            return false;
        };

        // Group 0 is the whole path.
        let groups = caps.len() - 1;
        if groups > 1 {
            self.captures = caps
                .iter()
                .skip(1)
                .map(|m| m.map(|m| m.as_str().to_string()))
                .collect();
        }

        for (i, value) in self.captures.iter().enumerate() {
            if let (Some(name), Some(value)) = (self.param_names.get(i), value) {
                self.last_params.insert(name.as_str(), value.as_str());
            }
        }

        true
    }
}
