//! Combined-regex matcher.
//!
//! The variable routes of one method are split into chunks, and every chunk
//! is compiled into a single anchored alternation:
//!
//! ```text
//! ^(?:(/user/([^/]+))|(/user/([^/]+)/posts/(\d+)))$
//!     ^ marker group    ^ marker group
//! ```
//!
//! Each alternative opens with a marker group followed by one group per
//! placeholder. The first marker that participates in a match identifies the
//! route, so a single regex execution replaces one attempt per route.

use crossway_core::{BuildError, Matched, Params, RouteMatcher, Segment, VariableRoute};
use regex::Regex;

/// Pattern used for placeholders without a constraint.
pub const DEFAULT_PLACEHOLDER_PATTERN: &str = "[^/]+";

const DEFAULT_CHUNK_SIZE: usize = 10;

/// A matcher compiling routes into combined regular expressions.
#[derive(Debug, Clone, Copy)]
pub struct RegexMatcher {
    chunk_size: usize,
}

impl Default for RegexMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl RegexMatcher {
    /// Create a matcher with the default chunk size of 10 routes.
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Set how many routes share one regex. Zero is treated as one.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Routes per regex.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

/// The routes of one method, compiled by [`RegexMatcher`].
#[derive(Debug)]
pub struct RegexGroup<H, M> {
    chunks: Vec<RegexChunk<H, M>>,
}

impl<H, M> RegexGroup<H, M> {
    /// Number of compiled regular expressions.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// The compiled expressions, in chunk order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.chunks.iter().map(|c| c.regex.as_str())
    }
}

#[derive(Debug)]
struct RegexChunk<H, M> {
    regex: Regex,
    routes: Vec<ChunkRoute<H, M>>,
}

#[derive(Debug)]
struct ChunkRoute<H, M> {
    /// Capture index of the route's marker group.
    marker: usize,
    names: Vec<String>,
    route: VariableRoute<H, M>,
}

impl<H, M> RouteMatcher<H, M> for RegexMatcher
where
    H: Send + Sync,
    M: Send + Sync,
{
    type Group = RegexGroup<H, M>;

    fn compile(&self, routes: Vec<VariableRoute<H, M>>) -> Result<Self::Group, BuildError> {
        let mut chunks = Vec::with_capacity(routes.len().div_ceil(self.chunk_size));
        let mut routes = routes.into_iter().peekable();

        while routes.peek().is_some() {
            let mut pattern = String::from("^(?:");
            let mut members = Vec::with_capacity(self.chunk_size);
            let mut group_index = 0;

            for (n, route) in routes.by_ref().take(self.chunk_size).enumerate() {
                if n > 0 {
                    pattern.push('|');
                }
                group_index += 1;
                let marker = group_index;
                pattern.push('(');
                let mut names = Vec::new();
                for segment in &route.segments {
                    match segment {
                        Segment::Literal(text) => pattern.push_str(&regex::escape(text)),
                        Segment::Placeholder { name, pattern: constraint } => {
                            let constraint = match constraint {
                                Some(c) => validate_constraint(c)?,
                                None => DEFAULT_PLACEHOLDER_PATTERN,
                            };
                            group_index += 1;
                            pattern.push('(');
                            pattern.push_str(constraint);
                            pattern.push(')');
                            names.push(name.clone());
                        }
                    }
                }
                pattern.push(')');
                members.push(ChunkRoute {
                    marker,
                    names,
                    route,
                });
            }
            pattern.push_str(")$");

            let regex = Regex::new(&pattern).map_err(|e| BuildError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;
            chunks.push(RegexChunk {
                regex,
                routes: members,
            });
        }

        Ok(RegexGroup { chunks })
    }

    fn match_route<'g>(&self, group: &'g Self::Group, path: &str) -> Option<Matched<'g, H, M>> {
        for chunk in &group.chunks {
            let Some(captures) = chunk.regex.captures(path) else {
                continue;
            };
            let Some(member) = chunk.routes.iter().find(|r| captures.get(r.marker).is_some()) else {
                continue;
            };

            let params = member
                .names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let value = captures.get(member.marker + 1 + i).map_or("", |m| m.as_str());
                    (name.as_str(), value)
                })
                .collect::<Params>();

            return Some(Matched::new(
                &member.route.handler,
                params,
                &member.route.middleware,
            ));
        }
        None
    }
}

/// Check a placeholder constraint compiles on its own and adds no groups.
fn validate_constraint(pattern: &str) -> Result<&str, BuildError> {
    let regex = Regex::new(pattern).map_err(|e| BuildError::InvalidPattern {
        pattern: pattern.to_owned(),
        reason: e.to_string(),
    })?;
    if regex.captures_len() > 1 {
        return Err(BuildError::CapturingGroup {
            pattern: pattern.to_owned(),
        });
    }
    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(segments: Vec<Segment>, handler: u32) -> VariableRoute<u32, ()> {
        VariableRoute::new(segments, handler, vec![])
    }

    fn lookup<'g>(
        matcher: &RegexMatcher,
        group: &'g RegexGroup<u32, ()>,
        path: &str,
    ) -> Option<Matched<'g, u32, ()>> {
        matcher.match_route(group, path)
    }

    fn user_routes() -> Vec<VariableRoute<u32, ()>> {
        vec![
            route(
                vec![Segment::literal("/user/"), Segment::constrained("id", r"\d+")],
                1,
            ),
            route(vec![Segment::literal("/user/"), Segment::placeholder("name")], 2),
            route(
                vec![
                    Segment::literal("/user/"),
                    Segment::placeholder("id"),
                    Segment::literal("/posts/"),
                    Segment::placeholder("post"),
                ],
                3,
            ),
        ]
    }

    #[test]
    fn test_first_registered_route_wins() {
        let matcher = RegexMatcher::new();
        let group = matcher.compile(user_routes()).unwrap();

        let numeric = lookup(&matcher, &group, "/user/42").unwrap();
        assert_eq!(*numeric.handler, 1);
        assert_eq!(numeric.params.get("id"), Some("42"));

        let named = lookup(&matcher, &group, "/user/alice").unwrap();
        assert_eq!(*named.handler, 2);
        assert_eq!(named.params.get("name"), Some("alice"));

        let nested = lookup(&matcher, &group, "/user/7/posts/9").unwrap();
        assert_eq!(*nested.handler, 3);
        assert_eq!(
            nested.params.iter().collect::<Vec<_>>(),
            vec![("id", "7"), ("post", "9")]
        );

        assert!(lookup(&matcher, &group, "/user/").is_none());
        assert!(lookup(&matcher, &group, "/user/7/posts").is_none());
    }

    #[test]
    fn test_chunking_preserves_order_and_groups() {
        let matcher = RegexMatcher::new().with_chunk_size(1);
        let group = matcher.compile(user_routes()).unwrap();
        assert_eq!(group.chunk_count(), 3);

        assert_eq!(*lookup(&matcher, &group, "/user/42").unwrap().handler, 1);
        let nested = lookup(&matcher, &group, "/user/x/posts/y").unwrap();
        assert_eq!(nested.params.get("post"), Some("y"));
    }

    #[test]
    fn test_literals_are_escaped() {
        let matcher = RegexMatcher::new();
        let group = matcher
            .compile(vec![route(
                vec![Segment::literal("/file."), Segment::placeholder("ext")],
                1,
            )])
            .unwrap();

        assert!(lookup(&matcher, &group, "/file.txt").is_some());
        assert!(lookup(&matcher, &group, "/fileXtxt").is_none());
    }

    #[test]
    fn test_constraint_errors() {
        let matcher = RegexMatcher::new();

        let capturing = matcher.compile(vec![route(vec![Segment::constrained("id", r"(\d+)")], 1)]);
        assert!(matches!(capturing, Err(BuildError::CapturingGroup { .. })));

        let invalid = matcher.compile(vec![route(vec![Segment::constrained("id", "[0-9")], 1)]);
        assert!(matches!(invalid, Err(BuildError::InvalidPattern { .. })));

        let non_capturing = matcher.compile(vec![route(
            vec![Segment::constrained("id", r"(?:\d+|new)")],
            1,
        )]);
        assert!(non_capturing.is_ok());
    }
}
