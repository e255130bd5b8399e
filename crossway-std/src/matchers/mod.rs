//! # Matching Strategies
//!
//! Implementations of [`RouteMatcher`](crossway_core::RouteMatcher):
//!
//! | Matcher | Constraints | Lookup cost | Precedence |
//! |---------|-------------|-------------|------------|
//! | [`RegexMatcher`] | yes | one regex per chunk of routes | registration order |
//! | [`LinearMatcher`] | no | one segment walk per route | registration order |
//! | `MatchitMatcher` (`matchit` feature) | no | O(path length) | literal before placeholder |
//!
//! `RegexMatcher` and `LinearMatcher` give earlier-registered routes
//! precedence. `MatchitMatcher` prefers a literal edge over a placeholder at
//! the same position, whatever the registration order.

pub mod linear;
#[cfg(feature = "matchit")]
pub mod matchit;
pub mod regex;

pub use linear::LinearMatcher;
#[cfg(feature = "matchit")]
pub use matchit::{MatchitGroup, MatchitMatcher};
pub use regex::{DEFAULT_PLACEHOLDER_PATTERN, RegexGroup, RegexMatcher};
