//! Linear-scan matcher.
//!
//! Tries each route in registration order by walking its segments against
//! the path. No regular expressions are involved, so placeholder
//! constraints are rejected at build time. Useful for small tables and as a
//! reference for the other matchers.

use crossway_core::{BuildError, Matched, Params, RouteMatcher, Segment, VariableRoute};

/// A matcher that scans routes one by one.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearMatcher;

impl LinearMatcher {
    /// Create a linear matcher.
    pub fn new() -> Self {
        Self
    }
}

impl<H, M> RouteMatcher<H, M> for LinearMatcher
where
    H: Send + Sync,
    M: Send + Sync,
{
    type Group = Vec<VariableRoute<H, M>>;

    fn compile(&self, routes: Vec<VariableRoute<H, M>>) -> Result<Self::Group, BuildError> {
        for route in &routes {
            for segment in &route.segments {
                if let Segment::Placeholder {
                    pattern: Some(pattern),
                    ..
                } = segment
                {
                    return Err(BuildError::UnsupportedPattern {
                        matcher: "LinearMatcher",
                        pattern: pattern.clone(),
                    });
                }
            }
        }
        Ok(routes)
    }

    fn match_route<'g>(&self, group: &'g Self::Group, path: &str) -> Option<Matched<'g, H, M>> {
        group.iter().find_map(|route| {
            let mut values = Vec::new();
            walk(&route.segments, path, &mut values).then(|| {
                let params = route.param_names().zip(values).collect::<Params>();
                Matched::new(&route.handler, params, &route.middleware)
            })
        })
    }
}

/// Match `segments` against the whole of `path`, collecting placeholder
/// values. A placeholder takes the longest run of non-`/` characters that
/// still lets the rest of the route match.
fn walk<'p>(segments: &[Segment], path: &'p str, values: &mut Vec<&'p str>) -> bool {
    let Some((first, rest)) = segments.split_first() else {
        return path.is_empty();
    };

    match first {
        Segment::Literal(text) => match path.strip_prefix(text.as_str()) {
            Some(remaining) => walk(rest, remaining, values),
            None => false,
        },
        Segment::Placeholder { .. } => {
            let run = path.find('/').unwrap_or(path.len());
            let ends = path[..run]
                .char_indices()
                .map(|(i, c)| i + c.len_utf8())
                .rev();
            for end in ends {
                values.push(&path[..end]);
                if walk(rest, &path[end..], values) {
                    return true;
                }
                values.pop();
            }
            false
        }
    }
}
