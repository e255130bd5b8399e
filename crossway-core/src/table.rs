//! # Route Table
//!
//! The in-memory structure a [`Dispatcher`](crate::Dispatcher) reads from.
//!
//! | Part | Key | Value |
//! |------|-----|-------|
//! | static routes | method, exact path | [`StaticRoute`] |
//! | variable routes | method | matcher-specific compiled group `G` |
//! | named routes | route name | [`NamedRoute`] |
//!
//! A table is filled once by a collector and never mutated after it has been
//! handed to a dispatcher. The wildcard method [`ANY_METHOD`] is an ordinary
//! key here; its fallback semantics live in the dispatcher.

use crate::segment::Segment;
use std::collections::{BTreeMap, HashMap};

/// The pseudo-method matching any request method.
pub const ANY_METHOD: &str = "*";

/// A route matched by exact path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRoute<H, M> {
    /// The handler to serve the request.
    pub handler: H,
    /// Middleware attached to the route, passed through untouched.
    pub middleware: Vec<M>,
}

impl<H, M> StaticRoute<H, M> {
    /// Create a static route.
    pub fn new(handler: H, middleware: Vec<M>) -> Self {
        Self {
            handler,
            middleware,
        }
    }
}

/// A route whose template contains placeholders.
///
/// This is the input a [`RouteMatcher`](crate::RouteMatcher) compiles into
/// its group structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRoute<H, M> {
    /// Template segments, in order.
    pub segments: Vec<Segment>,
    /// The handler to serve the request.
    pub handler: H,
    /// Middleware attached to the route, passed through untouched.
    pub middleware: Vec<M>,
}

impl<H, M> VariableRoute<H, M> {
    /// Create a variable route.
    pub fn new(segments: Vec<Segment>, handler: H, middleware: Vec<M>) -> Self {
        Self {
            segments,
            handler,
            middleware,
        }
    }

    /// Placeholder names in template order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::placeholder_name)
    }
}

/// Reverse-routing data registered under a route name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamedRoute {
    /// A fixed path, returned verbatim.
    Static(String),
    /// Template options in registration order.
    Options(Vec<Vec<Segment>>),
}

/// Static routes, compiled variable groups and named routes.
///
/// `G` is the group type of the matcher the table was built for.
#[derive(Debug)]
pub struct RouteTable<H, M, G> {
    static_routes: BTreeMap<String, HashMap<String, StaticRoute<H, M>>>,
    variable_routes: BTreeMap<String, G>,
    named_routes: HashMap<String, NamedRoute>,
}

impl<H, M, G> Default for RouteTable<H, M, G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, M, G> RouteTable<H, M, G> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            static_routes: BTreeMap::new(),
            variable_routes: BTreeMap::new(),
            named_routes: HashMap::new(),
        }
    }

    /// Insert a static route, returning the route it replaced.
    pub fn insert_static(
        &mut self,
        method: impl Into<String>,
        path: impl Into<String>,
        route: StaticRoute<H, M>,
    ) -> Option<StaticRoute<H, M>> {
        self.static_routes
            .entry(method.into())
            .or_default()
            .insert(path.into(), route)
    }

    /// Set the compiled variable-route group of a method.
    pub fn insert_group(&mut self, method: impl Into<String>, group: G) -> Option<G> {
        self.variable_routes.insert(method.into(), group)
    }

    /// Register `segments` as one more option for `name`.
    ///
    /// A literal-only option registered under a fresh name is stored as
    /// [`NamedRoute::Static`]; any further option promotes the entry to
    /// [`NamedRoute::Options`].
    pub fn register_name(&mut self, name: impl Into<String>, segments: Vec<Segment>) {
        use std::collections::hash_map::Entry;

        match self.named_routes.entry(name.into()) {
            Entry::Vacant(slot) => {
                let route = if crate::segment::is_static(&segments) {
                    NamedRoute::Static(crate::segment::literal_path(&segments))
                } else {
                    NamedRoute::Options(vec![segments])
                };
                slot.insert(route);
            }
            Entry::Occupied(mut slot) => {
                let route = slot.get_mut();
                if let NamedRoute::Static(path) = route {
                    let first = vec![Segment::Literal(std::mem::take(path))];
                    *route = NamedRoute::Options(vec![first]);
                }
                if let NamedRoute::Options(options) = route {
                    options.push(segments);
                }
            }
        }
    }

    /// Replace the named entry for `name` wholesale.
    pub fn insert_named(&mut self, name: impl Into<String>, route: NamedRoute) -> Option<NamedRoute> {
        self.named_routes.insert(name.into(), route)
    }

    /// Static route registered for exactly `method` and `path`.
    pub fn static_route(&self, method: &str, path: &str) -> Option<&StaticRoute<H, M>> {
        self.static_routes.get(method)?.get(path)
    }

    /// Compiled group for `method`.
    pub fn group(&self, method: &str) -> Option<&G> {
        self.variable_routes.get(method)
    }

    /// Named entry for `name`.
    pub fn named(&self, name: &str) -> Option<&NamedRoute> {
        self.named_routes.get(name)
    }

    /// Iterate static path maps per method, in method order.
    pub fn static_methods(&self) -> impl Iterator<Item = (&str, &HashMap<String, StaticRoute<H, M>>)> {
        self.static_routes.iter().map(|(m, r)| (m.as_str(), r))
    }

    /// Iterate compiled groups per method, in method order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &G)> {
        self.variable_routes.iter().map(|(m, g)| (m.as_str(), g))
    }

    /// Total number of static routes across all methods.
    pub fn static_len(&self) -> usize {
        self.static_routes.values().map(HashMap::len).sum()
    }

    /// True when nothing at all has been registered.
    pub fn is_empty(&self) -> bool {
        self.static_routes.is_empty() && self.variable_routes.is_empty() && self.named_routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_lookup() {
        let mut table: RouteTable<&str, (), ()> = RouteTable::new();
        table.insert_static("GET", "/health", StaticRoute::new("h1", vec![]));

        assert_eq!(table.static_route("GET", "/health").map(|r| r.handler), Some("h1"));
        assert!(table.static_route("POST", "/health").is_none());
        assert_eq!(table.static_len(), 1);
    }

    #[test]
    fn test_register_name_promotes_static() {
        let mut table: RouteTable<(), (), ()> = RouteTable::new();
        table.register_name("home", vec![Segment::literal("/")]);
        assert_eq!(table.named("home"), Some(&NamedRoute::Static("/".to_string())));

        table.register_name(
            "home",
            vec![Segment::literal("/"), Segment::placeholder("lang")],
        );
        match table.named("home") {
            Some(NamedRoute::Options(options)) => {
                assert_eq!(options.len(), 2);
                assert_eq!(options[0], vec![Segment::literal("/")]);
            }
            other => panic!("expected options, got {:?}", other),
        }
    }
}
