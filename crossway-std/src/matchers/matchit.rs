//! Matchit-based matcher.
//!
//! Compiles each method's routes into a `matchit` radix tree. Lookups cost
//! O(path length) regardless of the number of routes. `matchit` rejects
//! overlapping placeholders at the same position (e.g. `/user/{id}` and
//! `/user/{name}`), and constraints cannot be expressed.
//!
//! Precedence follows the tree, not registration order: a literal edge is
//! tried before a placeholder at the same position. With `/a/{x}/b`
//! registered before `/a/c/{y}`, the path `/a/c/b` matches `/a/c/{y}`.

use crossway_core::{BuildError, Matched, Params, RouteMatcher, Segment, Template, VariableRoute};
use matchit::Router as InnerRouter;

/// A matcher backed by `matchit`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchitMatcher;

impl MatchitMatcher {
    /// Create a matchit matcher.
    pub fn new() -> Self {
        Self
    }
}

/// The routes of one method, compiled by [`MatchitMatcher`].
pub struct MatchitGroup<H, M> {
    router: InnerRouter<usize>,
    routes: Vec<VariableRoute<H, M>>,
}

impl<H, M> MatchitGroup<H, M> {
    /// Number of routes in the tree.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True if the group holds no route.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<H, M> RouteMatcher<H, M> for MatchitMatcher
where
    H: Send + Sync,
    M: Send + Sync,
{
    type Group = MatchitGroup<H, M>;

    fn compile(&self, routes: Vec<VariableRoute<H, M>>) -> Result<Self::Group, BuildError> {
        let mut router = InnerRouter::new();
        for (index, route) in routes.iter().enumerate() {
            let template = matchit_template(&route.segments)?;
            router
                .insert(template, index)
                .map_err(|e| BuildError::InvalidPattern {
                    pattern: Template(&route.segments).to_string(),
                    reason: e.to_string(),
                })?;
        }
        Ok(MatchitGroup { router, routes })
    }

    fn match_route<'g>(&self, group: &'g Self::Group, path: &str) -> Option<Matched<'g, H, M>> {
        let matched = group.router.at(path).ok()?;
        let route = group.routes.get(*matched.value)?;
        let params = matched.params.iter().collect::<Params>();
        Some(Matched::new(&route.handler, params, &route.middleware))
    }
}

/// Render segments in `matchit` syntax, escaping literal braces.
fn matchit_template(segments: &[Segment]) -> Result<String, BuildError> {
    let mut template = String::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                template.push_str(&text.replace('{', "{{").replace('}', "}}"));
            }
            Segment::Placeholder {
                name,
                pattern: None,
            } => {
                template.push('{');
                template.push_str(name);
                template.push('}');
            }
            Segment::Placeholder {
                pattern: Some(pattern),
                ..
            } => {
                return Err(BuildError::UnsupportedPattern {
                    matcher: "MatchitMatcher",
                    pattern: pattern.clone(),
                });
            }
        }
    }
    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'g>(group: &'g MatchitGroup<u8, ()>, path: &str) -> Option<Matched<'g, u8, ()>> {
        MatchitMatcher.match_route(group, path)
    }

    #[test]
    fn test_matchit_routes() {
        let group = MatchitMatcher
            .compile(vec![
                VariableRoute::new(vec![Segment::literal("/user/"), Segment::placeholder("id")], 1u8, vec![]),
                VariableRoute::new(
                    vec![
                        Segment::literal("/user/"),
                        Segment::placeholder("id"),
                        Segment::literal("/posts"),
                    ],
                    2u8,
                    vec![],
                ),
            ])
            .unwrap();

        let found = lookup(&group, "/user/42").unwrap();
        assert_eq!(*found.handler, 1);
        assert_eq!(found.params.get("id"), Some("42"));
        assert_eq!(*lookup(&group, "/user/42/posts").unwrap().handler, 2);
        assert!(lookup(&group, "/user").is_none());
    }

    #[test]
    fn test_literal_edges_win_over_registration_order() {
        let group = MatchitMatcher
            .compile(vec![
                VariableRoute::new(
                    vec![Segment::literal("/a/"), Segment::placeholder("x"), Segment::literal("/b")],
                    1u8,
                    vec![],
                ),
                VariableRoute::new(vec![Segment::literal("/a/c/"), Segment::placeholder("y")], 2u8, vec![]),
            ])
            .unwrap();

        let found = lookup(&group, "/a/c/b").unwrap();
        assert_eq!(*found.handler, 2);
        assert_eq!(found.params.get("y"), Some("b"));

        let found = lookup(&group, "/a/d/b").unwrap();
        assert_eq!(*found.handler, 1);
        assert_eq!(found.params.get("x"), Some("d"));
    }

    #[test]
    fn test_constraints_rejected() {
        let result = MatchitMatcher.compile(vec![VariableRoute::<u8, ()>::new(
            vec![Segment::literal("/"), Segment::constrained("id", r"\d+")],
            1,
            vec![],
        )]);
        assert!(matches!(result, Err(BuildError::UnsupportedPattern { .. })));
    }

    #[test]
    fn test_conflicts_reported() {
        let result = MatchitMatcher.compile(vec![
            VariableRoute::<u8, ()>::new(vec![Segment::literal("/user/"), Segment::placeholder("id")], 1, vec![]),
            VariableRoute::<u8, ()>::new(vec![Segment::literal("/user/"), Segment::placeholder("name")], 2, vec![]),
        ]);
        assert!(matches!(result, Err(BuildError::InvalidPattern { .. })));
    }
}
