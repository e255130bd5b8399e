//! Route template parser.
//!
//! Turns a template string into one or more segment lists:
//!
//! | Syntax | Meaning |
//! |--------|---------|
//! | `/user/{id}` | placeholder matching one or more non-`/` characters |
//! | `/user/{id:\d+}` | placeholder constrained by a regex |
//! | `/posts[/{page}]` | trailing optional part, nestable |
//!
//! Each optional part adds one option, shortest first, so
//! `/a[/{b}[/{c}]]` yields `/a`, `/a/{b}` and `/a/{b}/{c}`.

use crossway_core::{BuildError, Segment};

/// Parse `template` into its options, shortest first.
///
/// # Errors
///
/// [`BuildError::Template`] for unbalanced braces or brackets, optional
/// parts that are not at the end, empty optional parts, bad placeholder
/// names and placeholders used twice.
pub fn parse_template(template: &str) -> Result<Vec<Vec<Segment>>, BuildError> {
    let error = |reason: &str| BuildError::Template {
        template: template.to_owned(),
        reason: reason.to_owned(),
    };

    let without_closing = template.trim_end_matches(']');
    let closing = template.len() - without_closing.len();

    let mut parts = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    for (i, ch) in without_closing.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => depth = depth.checked_sub(1).ok_or_else(|| error("unbalanced braces"))?,
            '[' if depth == 0 => {
                parts.push(&without_closing[start..i]);
                start = i + 1;
            }
            ']' if depth == 0 => {
                return Err(error("optional segments can only occur at the end of a route"));
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(error("unbalanced braces"));
    }
    parts.push(&without_closing[start..]);

    if parts.len() - 1 != closing {
        return Err(error("number of opening '[' and closing ']' does not match"));
    }

    let mut options = Vec::with_capacity(parts.len());
    let mut current = String::new();
    for (n, part) in parts.into_iter().enumerate() {
        if part.is_empty() && n != 0 {
            return Err(error("empty optional part"));
        }
        current.push_str(part);
        options.push(parse_placeholders(&current).map_err(|reason| error(&reason))?);
    }
    Ok(options)
}

/// Split a template without optional parts into segments.
fn parse_placeholders(route: &str) -> Result<Vec<Segment>, String> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut names: Vec<String> = Vec::new();
    let mut chars = route.char_indices();

    while let Some((i, ch)) = chars.next() {
        match ch {
            '{' => {
                let mut depth = 1usize;
                let mut end = None;
                for (j, c) in chars.by_ref() {
                    match c {
                        '{' => depth += 1,
                        '}' => {
                            depth -= 1;
                            if depth == 0 {
                                end = Some(j);
                                break;
                            }
                        }
                        _ => {}
                    }
                }
                let end = end.ok_or("unbalanced braces")?;
                let placeholder = parse_placeholder(&route[i + 1..end])?;
                if let Some(name) = placeholder.placeholder_name() {
                    if names.iter().any(|n| n == name) {
                        return Err(format!("cannot use the same placeholder \"{}\" twice", name));
                    }
                    names.push(name.to_owned());
                }
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(placeholder);
            }
            '}' => return Err("unbalanced braces".to_owned()),
            _ => literal.push(ch),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

/// Parse the inside of `{...}`.
fn parse_placeholder(body: &str) -> Result<Segment, String> {
    let (name, pattern) = match body.split_once(':') {
        Some((name, pattern)) => (name.trim(), Some(pattern.trim())),
        None => (body.trim(), None),
    };

    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(format!("invalid placeholder name \"{}\"", name));
    }

    match pattern {
        Some("") => Err(format!("empty pattern for placeholder \"{}\"", name)),
        Some(pattern) => Ok(Segment::constrained(name, pattern)),
        None => Ok(Segment::placeholder(name)),
    }
}
