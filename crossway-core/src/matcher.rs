//! # Matching Strategy Layer
//!
//! A [`RouteMatcher`] turns the variable routes of one method into a compiled
//! group and later answers "does this path match any of them". The
//! [`Dispatcher`](crate::Dispatcher) composes a matcher but never looks inside
//! its groups.
//!
//! # Implementations
//!
//! | Matcher | Crate | Notes |
//! |---------|-------|-------|
//! | `RegexMatcher` | `crossway-std` | Combined regex per chunk of routes |
//! | `LinearMatcher` | `crossway-std` | Segment walk, no regex |
//! | `MatchitMatcher` | `crossway-std` (`matchit` feature) | Radix tree |

use crate::{error::BuildError, params::Params, table::VariableRoute};

/// A successful match: the route's handler, its middleware and the
/// extracted placeholder values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matched<'a, H, M> {
    /// The handler to serve the request.
    pub handler: &'a H,
    /// Placeholder values, empty for static routes.
    pub params: Params,
    /// Middleware attached to the route.
    pub middleware: &'a [M],
}

impl<'a, H, M> Matched<'a, H, M> {
    /// Create a match result.
    pub fn new(handler: &'a H, params: Params, middleware: &'a [M]) -> Self {
        Self {
            handler,
            params,
            middleware,
        }
    }
}

/// Pluggable variable-route matching strategy.
///
/// The strategy is chosen when the route table is built; each method's
/// variable routes are compiled once with [`compile`](Self::compile) and
/// then queried with [`match_route`](Self::match_route) on every dispatch.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot match routes with handler `{H}`",
    label = "missing `RouteMatcher` implementation",
    note = "Implement `RouteMatcher<{H}, {M}>` to plug a matching strategy into a dispatcher."
)]
pub trait RouteMatcher<H, M>: Send + Sync {
    /// The compiled, matcher-specific structure for one method.
    type Group: Send + Sync;

    /// Compile the variable routes of one method, in registration order.
    ///
    /// When several routes match the same path, the matcher decides which
    /// wins. Registration-order matchers give earlier routes precedence;
    /// tree-based ones may prefer more specific routes instead.
    fn compile(&self, routes: Vec<VariableRoute<H, M>>) -> Result<Self::Group, BuildError>;

    /// Match `path` against a compiled group.
    fn match_route<'g>(&self, group: &'g Self::Group, path: &str) -> Option<Matched<'g, H, M>>;

    /// Check whether `path` matches any route of the group.
    fn matches(&self, group: &Self::Group, path: &str) -> bool {
        self.match_route(group, path).is_some()
    }
}
