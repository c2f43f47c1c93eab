//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject unnamed and duplicate routes
//! - Reject routes that accept no method
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouteFileConfig → Result<(), Vec<ValidationError>>
//! - Patterns are never rejected; any string compiles to a matcher

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RouteFileConfig;

/// A semantic problem in a route file.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("route #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("route name '{name}' is used more than once")]
    DuplicateName { name: String },

    #[error("route '{name}' accepts no methods")]
    NoMethods { name: String },
}

/// Check `config`, collecting every problem found.
pub fn validate_config(config: &RouteFileConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName { index });
        } else if !seen.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateName {
                name: route.name.clone(),
            });
        }

        if route.methods.is_empty() {
            errors.push(ValidationError::NoMethods {
                name: route.name.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{MethodList, RouteConfig};

    fn route(name: &str, methods: MethodList) -> RouteConfig {
        RouteConfig {
            name: name.to_string(),
            methods,
            pattern: "/x".to_string(),
        }
    }

    #[test]
    fn test_valid_config() {
        let mut config = RouteFileConfig::default();
        config.routes.push(route("a", MethodList::One("GET".into())));
        config.routes.push(route("b", MethodList::Many(vec!["POST".into()])));
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_reports_all_errors() {
        let mut config = RouteFileConfig::default();
        config.routes.push(route("a", MethodList::One("GET".into())));
        config.routes.push(route("a", MethodList::Many(vec![])));
        config.routes.push(route(" ", MethodList::One("GET".into())));

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::DuplicateName { name: "a".into() },
                ValidationError::NoMethods { name: "a".into() },
                ValidationError::EmptyName { index: 2 },
            ]
        );
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::DuplicateName { name: "users".into() };
        assert_eq!(err.to_string(), "route name 'users' is used more than once");
    }
}
