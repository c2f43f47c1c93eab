//! Configuration schema definitions.
//!
//! This module defines the route file structure.
//! All types derive Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

/// Root of a route file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouteFileConfig {
    /// Route definitions, tried in file order.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// One route entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route identifier, reported on match.
    pub name: String,

    /// Accepted methods: a single token or a list.
    #[serde(default = "default_methods")]
    pub methods: MethodList,

    /// Path pattern, e.g. "/users/:id/posts/:postId".
    pub pattern: String,
}

fn default_methods() -> MethodList {
    MethodList::One("GET".to_string())
}

/// `methods = "GET"` or `methods = ["GET", "HEAD"]`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum MethodList {
    One(String),
    Many(Vec<String>),
}

impl MethodList {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            MethodList::One(method) => vec![method.clone()],
            MethodList::Many(methods) => methods.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            MethodList::One(_) => false,
            MethodList::Many(methods) => methods.is_empty(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
