#![allow(dead_code)]

use crossway::{BuildError, Dispatcher, RouteCollector, RouteDef, RouteMatcher};

// ============================================================================
// Test Types
// ============================================================================

pub type Handler = &'static str;
pub type Middleware = &'static str;
pub type TestDispatcher<S> = Dispatcher<Handler, Middleware, S>;

// ============================================================================
// Route Fixtures
// ============================================================================

/// Register the shared route set. Uses plain placeholders only, so every
/// matcher can compile it.
pub fn register(routes: &mut RouteCollector<Handler, Middleware>) -> Result<(), BuildError> {
    routes.get("/health", "health")?;
    routes.add(RouteDef::new("GET", "/user/{id}", "show_user").name("user"))?;
    routes.put("/user/{id}", "update_user")?;
    routes.add(RouteDef::new("GET", "/docs/{id}", "doc").name("doc"))?;
    routes.add(RouteDef::new("GET", "/docs/{id}/{rev}", "doc_rev").name("doc"))?;
    routes.any("/ping", "ping")?;
    routes.get("/status", "status")?;
    routes.head("/status", "status_head")?;
    routes.add(RouteDef::new("POST", "/upload", "upload").name("upload"))?;
    routes.add_group("/api", ["auth"], |api| {
        api.add(RouteDef::new("GET", "/items", "list_items").middleware(["cache"]))?;
        api.add(RouteDef::new("GET", "/items/{item}", "show_item").name("item"))?;
        api.delete("/items/{item}", "delete_item")?;
        Ok(())
    })?;
    routes.any("/fallback/{rest}", "fallback")?;
    Ok(())
}

pub fn dispatcher_with<S: RouteMatcher<Handler, Middleware>>(matcher: S) -> TestDispatcher<S> {
    let mut routes = RouteCollector::new();
    register(&mut routes).expect("fixture routes register");
    routes.build(matcher).expect("fixture routes compile")
}

/// Values substituted into placeholders for round-trip checks.
pub const SAMPLE_VALUES: &[&str] = &["42", "abc", "x-y_z", "caf\u{e9}", "a.b", "%20"];
