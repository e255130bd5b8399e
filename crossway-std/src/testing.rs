//! Testing utilities for Crossway.
//!
//! This module provides helpers to make route-table assertions terse.
//!
//! # Features
//!
//! - [`DispatchExt`]: unwrap a [`Dispatch`] into the expected outcome
//! - [`params`]: build a parameter map for `path_for` calls

use crossway_core::{Dispatch, Matched};
use std::collections::BTreeMap;

/// Assertion helpers for [`Dispatch`] results.
///
/// # Example
///
/// ```rust,ignore
/// let found = dispatcher.dispatch("GET", "/user/42").expect_found();
/// assert_eq!(found.params.get("id"), Some("42"));
/// ```
pub trait DispatchExt<'a, H, M> {
    /// Returns the match, panicking on any other outcome.
    fn expect_found(self) -> Matched<'a, H, M>;

    /// Returns the allowed methods, panicking on any other outcome.
    fn expect_not_allowed(self) -> Vec<String>;

    /// True for [`Dispatch::NotFound`].
    fn is_not_found(&self) -> bool;
}

impl<'a, H, M> DispatchExt<'a, H, M> for Dispatch<'a, H, M> {
    fn expect_found(self) -> Matched<'a, H, M> {
        match self {
            Dispatch::Found(found) => found,
            Dispatch::MethodNotAllowed(allowed) => {
                panic!("expected a route, got method not allowed ({:?})", allowed)
            }
            Dispatch::NotFound => panic!("expected a route, got not found"),
        }
    }

    fn expect_not_allowed(self) -> Vec<String> {
        match self {
            Dispatch::MethodNotAllowed(allowed) => allowed,
            Dispatch::Found(_) => panic!("expected method not allowed, got a route"),
            Dispatch::NotFound => panic!("expected method not allowed, got not found"),
        }
    }

    fn is_not_found(&self) -> bool {
        matches!(self, Dispatch::NotFound)
    }
}

/// Build an owned parameter map from `(name, value)` pairs.
pub fn params<V: ToString>(pairs: &[(&str, V)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), v.to_string()))
        .collect()
}
