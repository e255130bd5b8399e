//! Route collector: registers routes and builds a dispatcher.
//!
//! Literal-only templates go to the static table; templates with
//! placeholders are gathered per method and compiled by the chosen
//! [`RouteMatcher`] when [`RouteCollector::build`] runs.
//!
//! # Example
//!
//! ```rust
//! use crossway_std::{RegexMatcher, RouteCollector, RouteDef};
//!
//! let mut routes = RouteCollector::<&str, ()>::new();
//! routes.get("/health", "health")?;
//! routes.add(RouteDef::new("GET", "/user/{id:\\d+}", "show_user").name("user"))?;
//!
//! let dispatcher = routes.build(RegexMatcher::new())?;
//! assert_eq!(dispatcher.path_for("user", &[("id", 42)])?, "/user/42");
//! # Ok::<(), crossway_core::CrosswayError>(())
//! ```

use crate::parser::parse_template;
use crossway_core::{
    ANY_METHOD, BuildError, Dispatcher, RouteMatcher, RouteTable, Segment, StaticRoute, Template,
    VariableRoute, is_static, literal_path,
};
use std::collections::{BTreeMap, HashMap};

/// Conversion into a list of method tokens.
pub trait IntoMethods {
    /// Returns the methods, in order.
    fn into_methods(self) -> Vec<String>;
}

impl IntoMethods for &str {
    fn into_methods(self) -> Vec<String> {
        vec![self.to_owned()]
    }
}

impl IntoMethods for String {
    fn into_methods(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoMethods for &[&str] {
    fn into_methods(self) -> Vec<String> {
        self.iter().map(|m| (*m).to_owned()).collect()
    }
}

impl<const N: usize> IntoMethods for [&str; N] {
    fn into_methods(self) -> Vec<String> {
        self.iter().map(|m| (*m).to_owned()).collect()
    }
}

impl IntoMethods for Vec<String> {
    fn into_methods(self) -> Vec<String> {
        self
    }
}

/// A route registration: methods, template, handler, middleware and an
/// optional name.
#[derive(Debug, Clone)]
pub struct RouteDef<H, M> {
    methods: Vec<String>,
    template: String,
    handler: H,
    middleware: Vec<M>,
    name: Option<String>,
}

impl<H, M> RouteDef<H, M> {
    /// Describe a route for `methods` and `template`.
    pub fn new(methods: impl IntoMethods, template: impl Into<String>, handler: H) -> Self {
        Self {
            methods: methods.into_methods(),
            template: template.into(),
            handler,
            middleware: Vec::new(),
            name: None,
        }
    }

    /// Register the route under `name` for reverse routing.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach middleware, after any inherited from enclosing groups.
    pub fn middleware(mut self, middleware: impl IntoIterator<Item = M>) -> Self {
        self.middleware.extend(middleware);
        self
    }
}

/// Collects routes and builds a [`Dispatcher`].
#[derive(Debug)]
pub struct RouteCollector<H, M> {
    static_routes: HashMap<(String, String), StaticRoute<H, M>>,
    variable_routes: BTreeMap<String, Vec<VariableRoute<H, M>>>,
    names: Vec<(String, Vec<Segment>)>,
    prefix: String,
    group_middleware: Vec<M>,
    allow_duplicates: bool,
}

impl<H, M> Default for RouteCollector<H, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H, M> RouteCollector<H, M> {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self {
            static_routes: HashMap::new(),
            variable_routes: BTreeMap::new(),
            names: Vec::new(),
            prefix: String::new(),
            group_middleware: Vec::new(),
            allow_duplicates: false,
        }
    }

    /// Allow duplicate registrations (later registrations replace earlier ones).
    pub fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }

    /// Number of registered routes, counting each method and option.
    pub fn len(&self) -> usize {
        self.static_routes.len() + self.variable_routes.values().map(Vec::len).sum::<usize>()
    }

    /// True if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Compile the collected routes with `matcher`.
    ///
    /// # Errors
    ///
    /// Any [`BuildError`] reported by the matcher, e.g. an invalid
    /// placeholder constraint.
    pub fn build<S: RouteMatcher<H, M>>(self, matcher: S) -> Result<Dispatcher<H, M, S>, BuildError> {
        let mut table = RouteTable::new();

        #[cfg(feature = "tracing")]
        let (static_count, variable_count) = (
            self.static_routes.len(),
            self.variable_routes.values().map(Vec::len).sum::<usize>(),
        );

        for ((method, path), route) in self.static_routes {
            table.insert_static(method, path, route);
        }
        for (method, routes) in self.variable_routes {
            let group = matcher.compile(routes)?;
            table.insert_group(method, group);
        }
        for (name, segments) in self.names {
            table.register_name(name, segments);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            static_routes = static_count,
            variable_routes = variable_count,
            matcher = std::any::type_name::<S>(),
            "route table built"
        );

        Ok(Dispatcher::new(table, matcher))
    }
}

impl<H: Clone, M: Clone> RouteCollector<H, M> {
    /// Register a route.
    ///
    /// The template is prefixed with the current group prefix and the
    /// route inherits the current group middleware.
    ///
    /// # Errors
    ///
    /// [`BuildError::EmptyMethod`], [`BuildError::Template`] or
    /// [`BuildError::DuplicateRoute`].
    pub fn add(&mut self, route: RouteDef<H, M>) -> Result<&mut Self, BuildError> {
        if route.methods.is_empty() {
            return Err(BuildError::EmptyMethod);
        }

        let template = format!("{}{}", self.prefix, route.template);
        let options = parse_template(&template)?;
        let middleware: Vec<M> = self
            .group_middleware
            .iter()
            .cloned()
            .chain(route.middleware)
            .collect();

        // Check every (method, option) pair before touching the tables so a
        // failed registration leaves the collector unchanged.
        let mut staged_static: Vec<(String, String)> = Vec::new();
        let mut staged_variable: Vec<(&str, &[Segment])> = Vec::new();
        for method in &route.methods {
            for option in &options {
                if is_static(option) {
                    let key = (method.clone(), literal_path(option));
                    if !self.allow_duplicates
                        && (self.static_routes.contains_key(&key) || staged_static.contains(&key))
                    {
                        return Err(BuildError::DuplicateRoute {
                            method: key.0,
                            route: key.1,
                        });
                    }
                    staged_static.push(key);
                } else {
                    let taken = self.has_variable(method, option)
                        || staged_variable
                            .iter()
                            .any(|&(m, s)| m == method.as_str() && s == option.as_slice());
                    if !self.allow_duplicates && taken {
                        return Err(BuildError::DuplicateRoute {
                            method: method.clone(),
                            route: Template(option).to_string(),
                        });
                    }
                    staged_variable.push((method.as_str(), option.as_slice()));
                }
            }
        }

        for key in staged_static {
            self.static_routes
                .insert(key, StaticRoute::new(route.handler.clone(), middleware.clone()));
        }
        for (method, segments) in staged_variable {
            self.insert_variable(method, segments, &route.handler, &middleware);
        }

        if let Some(name) = route.name {
            for option in options {
                self.names.push((name.clone(), option));
            }
        }

        Ok(self)
    }

    /// Register `handler` for `methods` and `template`.
    pub fn add_route(
        &mut self,
        methods: impl IntoMethods,
        template: &str,
        handler: H,
    ) -> Result<&mut Self, BuildError> {
        self.add(RouteDef::new(methods, template, handler))
    }

    /// Register a `GET` route.
    pub fn get(&mut self, template: &str, handler: H) -> Result<&mut Self, BuildError> {
        self.add_route("GET", template, handler)
    }

    /// Register a `POST` route.
    pub fn post(&mut self, template: &str, handler: H) -> Result<&mut Self, BuildError> {
        self.add_route("POST", template, handler)
    }

    /// Register a `PUT` route.
    pub fn put(&mut self, template: &str, handler: H) -> Result<&mut Self, BuildError> {
        self.add_route("PUT", template, handler)
    }

    /// Register a `PATCH` route.
    pub fn patch(&mut self, template: &str, handler: H) -> Result<&mut Self, BuildError> {
        self.add_route("PATCH", template, handler)
    }

    /// Register a `DELETE` route.
    pub fn delete(&mut self, template: &str, handler: H) -> Result<&mut Self, BuildError> {
        self.add_route("DELETE", template, handler)
    }

    /// Register a `HEAD` route.
    pub fn head(&mut self, template: &str, handler: H) -> Result<&mut Self, BuildError> {
        self.add_route("HEAD", template, handler)
    }

    /// Register an `OPTIONS` route.
    pub fn options(&mut self, template: &str, handler: H) -> Result<&mut Self, BuildError> {
        self.add_route("OPTIONS", template, handler)
    }

    /// Register a route for any method. It is only consulted after the
    /// requested method (and `GET` for `HEAD`) found nothing.
    pub fn any(&mut self, template: &str, handler: H) -> Result<&mut Self, BuildError> {
        self.add_route(ANY_METHOD, template, handler)
    }

    /// Register routes under a common prefix and middleware.
    ///
    /// Groups nest; prefixes concatenate and middleware accumulates
    /// outermost first.
    pub fn add_group<F>(
        &mut self,
        prefix: &str,
        middleware: impl IntoIterator<Item = M>,
        routes: F,
    ) -> Result<&mut Self, BuildError>
    where
        F: FnOnce(&mut Self) -> Result<(), BuildError>,
    {
        let outer_prefix_len = self.prefix.len();
        let outer_middleware_len = self.group_middleware.len();
        self.prefix.push_str(prefix);
        self.group_middleware.extend(middleware);

        let result = routes(self);

        self.prefix.truncate(outer_prefix_len);
        self.group_middleware.truncate(outer_middleware_len);
        result.map(|()| self)
    }

    fn has_variable(&self, method: &str, segments: &[Segment]) -> bool {
        self.variable_routes
            .get(method)
            .is_some_and(|routes| routes.iter().any(|r| r.segments == segments))
    }

    /// Push a variable route, replacing an existing one with the same segments.
    fn insert_variable(&mut self, method: &str, segments: &[Segment], handler: &H, middleware: &[M]) {
        let routes = self.variable_routes.entry(method.to_owned()).or_default();
        let route = VariableRoute::new(segments.to_vec(), handler.clone(), middleware.to_vec());
        match routes.iter_mut().find(|r| r.segments == segments) {
            Some(existing) => *existing = route,
            None => routes.push(route),
        }
    }
}
