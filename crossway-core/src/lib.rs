//! # crossway-core
//!
//! Route table, dispatcher and matching-strategy traits for the Crossway
//! router.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! matcher implementations that don't need the collector and strategies in
//! `crossway-std`.
//!
//! # Components
//!
//! ## Route Table ([`RouteTable`])
//!
//! Built once, then read-only. Holds static routes keyed by method and exact
//! path, one compiled variable-route group per method, and the named routes
//! used for reverse routing.
//!
//! ## Matching Strategy ([`RouteMatcher`])
//!
//! The single extension point: compiles a method's variable routes into an
//! opaque group and matches paths against it.
//!
//! ## Dispatcher ([`Dispatcher`])
//!
//! - [`Dispatcher::dispatch`] resolves `(method, path)` to a [`Dispatch`]:
//!   found, method not allowed, or not found
//! - [`Dispatcher::path_for`] produces a path from a route name and parameters
//!
//! # Error Types
//!
//! - [`CrosswayError`] - Top-level error type
//! - [`BadRoute`] - Reverse routing errors
//! - [`BuildError`] - Route table construction errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatcher;
mod error;
mod generator;
mod matcher;
mod params;
mod segment;
mod table;

// Re-exports
pub use dispatcher::{Dispatch, Dispatcher};
pub use error::{BadRoute, BuildError, CrosswayError};
pub use matcher::{Matched, RouteMatcher};
pub use params::{ParamSource, Params};
pub use segment::{Segment, Template, is_static, literal_path};
pub use table::{ANY_METHOD, NamedRoute, RouteTable, StaticRoute, VariableRoute};
