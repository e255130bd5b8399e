//! # crossway-std
//!
//! Standard implementations for the Crossway router.
//!
//! This crate provides:
//! - **Matching strategies**: [`RegexMatcher`], [`LinearMatcher`] and, with
//!   the `matchit` feature, `MatchitMatcher`
//! - **Template parsing**: [`parse_template`]
//! - **Route collection**: [`RouteCollector`], [`RouteDef`]
//! - **Testing helpers**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use crossway_core;

// Modules
pub mod collector;
pub mod matchers;
pub mod parser;
pub mod testing;

pub use collector::{IntoMethods, RouteCollector, RouteDef};
#[cfg(feature = "matchit")]
pub use matchers::{MatchitGroup, MatchitMatcher};
pub use matchers::{LinearMatcher, RegexGroup, RegexMatcher};
pub use parser::parse_template;
