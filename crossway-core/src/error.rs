//! Error types for Crossway.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`CrosswayError`] - Top-level error type for all Crossway operations
//! - [`BadRoute`] - Reverse routing failures raised by `path_for`
//! - [`BuildError`] - Failures while building a route table
//!
//! Dispatching never fails: "nothing matched" is an ordinary
//! [`Dispatch`](crate::Dispatch) value, not an error.

use thiserror::Error;

/// Top-level error type for all Crossway operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrosswayError {
    /// Reverse routing failed.
    #[error("bad route: {0}")]
    BadRoute(#[from] BadRoute),

    /// The route table could not be built.
    #[error("build error: {0}")]
    Build(#[from] BuildError),
}

/// Errors produced while generating a path from a named route.
///
/// These are caller-input errors (an unknown name or missing parameter),
/// not faults of the routing table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BadRoute {
    /// No route is registered under this name.
    #[error("no route found with name: {0}")]
    UnknownName(String),

    /// A placeholder of the route has no value in the supplied parameters.
    #[error("missing route parameter \"{0}\"")]
    MissingParameter(String),
}

/// Errors that can occur while collecting routes or compiling matchers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Two routes resolve to the same method and path shape.
    #[error("cannot register two routes matching \"{route}\" for method \"{method}\"")]
    DuplicateRoute {
        /// Method the routes were registered for.
        method: String,
        /// Rendered route (path or template).
        route: String,
    },

    /// A placeholder constraint is not a valid regular expression.
    #[error("invalid pattern \"{pattern}\": {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A placeholder constraint contains a capturing group.
    #[error("pattern \"{pattern}\" contains a capturing group")]
    CapturingGroup {
        /// The offending pattern.
        pattern: String,
    },

    /// The selected matcher cannot express a placeholder constraint.
    #[error("{matcher} does not support placeholder constraint \"{pattern}\"")]
    UnsupportedPattern {
        /// Name of the matcher.
        matcher: &'static str,
        /// The constraint it rejected.
        pattern: String,
    },

    /// A route template could not be parsed.
    #[error("invalid route template \"{template}\": {reason}")]
    Template {
        /// The template as written.
        template: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A route was registered without any method.
    #[error("route registered without a method")]
    EmptyMethod,
}
