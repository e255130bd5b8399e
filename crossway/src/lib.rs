//! # crossway - HTTP route matching and reverse routing
//!
//! `crossway` resolves `(method, path)` pairs to handlers and produces paths
//! from route names. Handlers and middleware are opaque values of your
//! choosing; nothing is executed here.
//!
//! ## Quick Start
//!
//! ```rust
//! use crossway::prelude::*;
//!
//! let dispatcher = crossway::simple_dispatcher::<_, (), _>(|routes| {
//!     routes.get("/health", "health")?;
//!     routes.add(RouteDef::new("GET", "/user/{id:\\d+}", "show_user").name("user"))?;
//!     Ok(())
//! })?;
//!
//! match dispatcher.dispatch("GET", "/user/42") {
//!     Dispatch::Found(found) => {
//!         assert_eq!(*found.handler, "show_user");
//!         assert_eq!(found.params.get("id"), Some("42"));
//!     }
//!     Dispatch::MethodNotAllowed(allowed) => panic!("allowed: {:?}", allowed),
//!     Dispatch::NotFound => panic!("not found"),
//! }
//!
//! assert_eq!(dispatcher.path_for("user", &[("id", 7)])?, "/user/7");
//! # Ok::<(), crossway::CrosswayError>(())
//! ```
//!
//! ## Choosing a Matcher
//!
//! | Matcher | Use Case |
//! |---------|----------|
//! | [`RegexMatcher`] | Default; supports `{name:regex}` constraints |
//! | [`LinearMatcher`] | Small tables, no regex engine |
//! | `MatchitMatcher` | Large tables of plain placeholders (`matchit` feature) |

#![deny(clippy::pub_use, clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use crossway_core::{
    // Table
    ANY_METHOD,
    // Errors
    BadRoute,
    BuildError,
    CrosswayError,
    // Dispatch
    Dispatch,
    Dispatcher,
    Matched,
    NamedRoute,
    // Params
    ParamSource,
    Params,
    RouteMatcher,
    RouteTable,
    // Segments
    Segment,
    StaticRoute,
    Template,
    VariableRoute,
};

pub use crossway_std::{
    IntoMethods, LinearMatcher, RegexGroup, RegexMatcher, RouteCollector, RouteDef, parse_template,
};

#[cfg(feature = "matchit")]
pub use crossway_std::{MatchitGroup, MatchitMatcher};

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use crossway_std::testing::*;
}

/// Prelude module - common imports for Crossway.
///
/// # Usage
///
/// ```rust,ignore
/// use crossway::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BadRoute, BuildError, Dispatch, Dispatcher, Matched, ParamSource, Params, RegexMatcher,
        RouteCollector, RouteDef, RouteMatcher,
    };
}

/// Build a dispatcher with the default [`RegexMatcher`].
///
/// `routes` registers everything on a fresh [`RouteCollector`].
///
/// # Errors
///
/// Any [`BuildError`] raised while registering or compiling routes.
pub fn simple_dispatcher<H, M, F>(routes: F) -> Result<Dispatcher<H, M, RegexMatcher>, BuildError>
where
    H: Clone + Send + Sync,
    M: Clone + Send + Sync,
    F: FnOnce(&mut RouteCollector<H, M>) -> Result<(), BuildError>,
{
    let mut collector = RouteCollector::new();
    routes(&mut collector)?;
    collector.build(RegexMatcher::new())
}
