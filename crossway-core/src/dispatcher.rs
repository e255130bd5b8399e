//! # Dispatcher
//!
//! Answers "which handler serves `METHOD /path`" from a [`RouteTable`].
//!
//! Lookup order, first success wins:
//!
//! 1. static route of the requested method
//! 2. variable routes of the requested method
//! 3. for `HEAD` only: steps 1-2 against `GET`
//! 4. steps 1-2 against the wildcard method `*`
//! 5. every other method is probed to tell 405 from 404
//!
//! Steps 1-4 are cheapest-first and most-specific-first, so an explicit
//! registration always wins over a fallback. Step 5 only runs on the
//! unmatched slow path.

use crate::{
    matcher::{Matched, RouteMatcher},
    params::Params,
    table::{ANY_METHOD, RouteTable},
};

/// Outcome of [`Dispatcher::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch<'a, H, M> {
    /// A route serves this request.
    Found(Matched<'a, H, M>),
    /// The path exists, but only under the listed methods.
    MethodNotAllowed(Vec<String>),
    /// The path matches nothing under any method.
    NotFound,
}

impl<'a, H, M> Dispatch<'a, H, M> {
    /// Returns true if a route was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Dispatch::Found(_))
    }

    /// Returns the match, if any.
    pub fn found(self) -> Option<Matched<'a, H, M>> {
        match self {
            Dispatch::Found(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the allowed methods of a method-not-allowed outcome.
    pub fn allowed_methods(&self) -> Option<&[String]> {
        match self {
            Dispatch::MethodNotAllowed(methods) => Some(methods),
            _ => None,
        }
    }
}

/// Routes requests using a read-only [`RouteTable`] and a [`RouteMatcher`].
///
/// A dispatcher holds no mutable state; share it freely across threads.
/// To change routes, build a new dispatcher and swap it in.
pub struct Dispatcher<H, M, S: RouteMatcher<H, M>> {
    pub(crate) table: RouteTable<H, M, S::Group>,
    matcher: S,
}

impl<H, M, S> std::fmt::Debug for Dispatcher<H, M, S>
where
    S: RouteMatcher<H, M>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("static_routes", &self.table.static_len())
            .field("matcher", &std::any::type_name::<S>())
            .finish()
    }
}

impl<H, M, S: RouteMatcher<H, M>> Dispatcher<H, M, S> {
    /// Create a dispatcher over a fully built table.
    ///
    /// The groups in `table` must have been compiled by `matcher`.
    pub fn new(table: RouteTable<H, M, S::Group>, matcher: S) -> Self {
        Self { table, matcher }
    }

    /// The underlying route table.
    pub fn table(&self) -> &RouteTable<H, M, S::Group> {
        &self.table
    }

    /// The matching strategy.
    pub fn matcher(&self) -> &S {
        &self.matcher
    }

    /// Resolve `method` and `path` to a route.
    ///
    /// `path` must already be normalized; it is compared byte for byte.
    pub fn dispatch(&self, method: &str, path: &str) -> Dispatch<'_, H, M> {
        if let Some(found) = self.lookup(method, path) {
            #[cfg(feature = "tracing")]
            tracing::trace!(method, path, "route matched");
            return Dispatch::Found(found);
        }

        if method == "HEAD" {
            if let Some(found) = self.lookup("GET", path) {
                #[cfg(feature = "tracing")]
                tracing::trace!(path, "HEAD served by GET route");
                return Dispatch::Found(found);
            }
        }

        if let Some(found) = self.lookup(ANY_METHOD, path) {
            #[cfg(feature = "tracing")]
            tracing::trace!(method, path, "wildcard route matched");
            return Dispatch::Found(found);
        }

        let allowed = self.allowed_methods(method, path);
        if allowed.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::trace!(method, path, "no route found");
            Dispatch::NotFound
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(method, path, ?allowed, "method not allowed");
            Dispatch::MethodNotAllowed(allowed)
        }
    }

    /// Steps 1-2 for a single method bucket.
    fn lookup(&self, method: &str, path: &str) -> Option<Matched<'_, H, M>> {
        if let Some(route) = self.table.static_route(method, path) {
            return Some(Matched::new(&route.handler, Params::new(), &route.middleware));
        }

        let group = self.table.group(method)?;
        self.matcher.match_route(group, path)
    }

    /// Every method other than `method` that owns `path`.
    fn allowed_methods(&self, method: &str, path: &str) -> Vec<String> {
        let mut allowed: Vec<String> = self
            .table
            .static_methods()
            .filter(|(m, routes)| *m != method && routes.contains_key(path))
            .map(|(m, _)| m.to_owned())
            .collect();

        for (m, group) in self.table.groups() {
            if m == method || allowed.iter().any(|a| a == m) {
                continue;
            }
            if self.matcher.matches(group, path) {
                allowed.push(m.to_owned());
            }
        }

        allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::BuildError,
        segment::Segment,
        table::{StaticRoute, VariableRoute},
    };

    /// Matches `<prefix><value>` where the route is `[Literal(prefix), Placeholder]`.
    struct PrefixMatcher;

    impl RouteMatcher<&'static str, ()> for PrefixMatcher {
        type Group = Vec<VariableRoute<&'static str, ()>>;

        fn compile(
            &self,
            routes: Vec<VariableRoute<&'static str, ()>>,
        ) -> Result<Self::Group, BuildError> {
            Ok(routes)
        }

        fn match_route<'g>(
            &self,
            group: &'g Self::Group,
            path: &str,
        ) -> Option<Matched<'g, &'static str, ()>> {
            group.iter().find_map(|route| match route.segments.as_slice() {
                [Segment::Literal(prefix), Segment::Placeholder { name, .. }] => {
                    let value = path.strip_prefix(prefix.as_str())?;
                    if value.is_empty() || value.contains('/') {
                        return None;
                    }
                    let mut params = Params::new();
                    params.push(name.clone(), value);
                    Some(Matched::new(&route.handler, params, &route.middleware))
                }
                _ => None,
            })
        }
    }

    fn variable(prefix: &str, name: &str, handler: &'static str) -> VariableRoute<&'static str, ()> {
        VariableRoute::new(
            vec![Segment::literal(prefix), Segment::placeholder(name)],
            handler,
            vec![],
        )
    }

    fn dispatcher() -> Dispatcher<&'static str, (), PrefixMatcher> {
        let matcher = PrefixMatcher;
        let mut table = RouteTable::new();
        table.insert_static("GET", "/health", StaticRoute::new("health", vec![]));
        table.insert_static("*", "/ping", StaticRoute::new("ping", vec![]));
        table.insert_static("DELETE", "/user/1", StaticRoute::new("delete_one", vec![]));
        table.insert_group("GET", matcher.compile(vec![variable("/user/", "id", "show")]).unwrap());
        table.insert_group("PUT", matcher.compile(vec![variable("/user/", "id", "update")]).unwrap());
        Dispatcher::new(table, matcher)
    }

    #[test]
    fn test_static_before_variable() {
        let d = dispatcher();
        let found = d.dispatch("GET", "/health").found().unwrap();
        assert_eq!(*found.handler, "health");
        assert!(found.params.is_empty());
    }

    #[test]
    fn test_variable_params() {
        let d = dispatcher();
        let found = d.dispatch("GET", "/user/42").found().unwrap();
        assert_eq!(*found.handler, "show");
        assert_eq!(found.params.get("id"), Some("42"));
    }

    #[test]
    fn test_head_and_wildcard_fallbacks() {
        let d = dispatcher();
        assert_eq!(*d.dispatch("HEAD", "/user/7").found().unwrap().handler, "show");
        assert_eq!(*d.dispatch("PATCH", "/ping").found().unwrap().handler, "ping");
        assert_eq!(*d.dispatch("HEAD", "/ping").found().unwrap().handler, "ping");
    }

    #[test]
    fn test_method_not_allowed_lists_static_and_variable_owners() {
        let d = dispatcher();
        assert_eq!(
            d.dispatch("POST", "/user/1"),
            Dispatch::MethodNotAllowed(vec![
                "DELETE".to_string(),
                "GET".to_string(),
                "PUT".to_string()
            ])
        );
        assert_eq!(
            d.dispatch("PUT", "/health").allowed_methods(),
            Some(&["GET".to_string()][..])
        );
    }

    #[test]
    fn test_not_found() {
        let d = dispatcher();
        assert_eq!(d.dispatch("GET", "/missing"), Dispatch::NotFound);
        assert_eq!(d.dispatch("BREW", "/missing"), Dispatch::NotFound);
    }
}
