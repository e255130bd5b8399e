//! Path template segments.
//!
//! A route template is compiled into an ordered list of [`Segment`]s.
//! Matching strategies consume them to build their own structures, and
//! reverse routing walks them to produce a path.

use std::fmt;

/// One piece of a route template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Text that must appear verbatim.
    Literal(String),
    /// A named placeholder, optionally constrained by a regular expression.
    ///
    /// Without a constraint the placeholder matches one or more characters
    /// other than `/`.
    Placeholder {
        /// Name the extracted value is stored under.
        name: String,
        /// Regular expression the value must match, if any.
        pattern: Option<String>,
    },
}

impl Segment {
    /// Create a literal segment.
    pub fn literal(text: impl Into<String>) -> Self {
        Segment::Literal(text.into())
    }

    /// Create an unconstrained placeholder.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Segment::Placeholder {
            name: name.into(),
            pattern: None,
        }
    }

    /// Create a placeholder constrained by `pattern`.
    pub fn constrained(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Segment::Placeholder {
            name: name.into(),
            pattern: Some(pattern.into()),
        }
    }

    /// Returns the placeholder name, if this is a placeholder.
    pub fn placeholder_name(&self) -> Option<&str> {
        match self {
            Segment::Placeholder { name, .. } => Some(name),
            Segment::Literal(_) => None,
        }
    }
}

/// Returns true when `segments` contains no placeholder.
pub fn is_static(segments: &[Segment]) -> bool {
    segments.iter().all(|s| matches!(s, Segment::Literal(_)))
}

/// Concatenates the literal text of `segments`, ignoring placeholders.
pub fn literal_path(segments: &[Segment]) -> String {
    segments
        .iter()
        .filter_map(|s| match s {
            Segment::Literal(text) => Some(text.as_str()),
            Segment::Placeholder { .. } => None,
        })
        .collect()
}

/// Renders segments back into template syntax, e.g. `/user/{id:\d+}`.
pub struct Template<'a>(pub &'a [Segment]);

impl fmt::Display for Template<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in self.0 {
            match segment {
                Segment::Literal(text) => f.write_str(text)?,
                Segment::Placeholder {
                    name,
                    pattern: None,
                } => write!(f, "{{{}}}", name)?,
                Segment::Placeholder {
                    name,
                    pattern: Some(pattern),
                } => write!(f, "{{{}:{}}}", name, pattern)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_detection() {
        let literal = [Segment::literal("/health")];
        let variable = [Segment::literal("/user/"), Segment::placeholder("id")];

        assert!(is_static(&literal));
        assert!(!is_static(&variable));
        assert_eq!(literal_path(&literal), "/health");
    }

    #[test]
    fn test_template_display() {
        let segments = [
            Segment::literal("/user/"),
            Segment::constrained("id", r"\d+"),
            Segment::literal("/"),
            Segment::placeholder("tab"),
        ];
        assert_eq!(Template(&segments).to_string(), r"/user/{id:\d+}/{tab}");
    }
}
