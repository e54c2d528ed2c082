//! `%(name)s` value interpolation.
//!
//! Responsibilities:
//! - Expand references against a caller-provided lookup (section, then defaults).
//! - Re-expand substituted text until no reference is left or the depth limit is hit.
//!
//! Invariants:
//! - A value without `%(` is returned verbatim, so `%Y-%m-%d` stays untouched.
//! - In a value with references, `%%` is a literal `%` and any other `%` is a syntax error.
//! - Substitution inserts the referenced key's raw value; the next pass expands it.

use crate::constants::MAX_INTERPOLATION_DEPTH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InterpolationFailure {
    Missing(String),
    Depth,
    Syntax(String),
}

pub(crate) fn interpolate<'a, F>(raw: &str, lookup: F) -> Result<String, InterpolationFailure>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut value = raw.to_string();
    for _ in 0..MAX_INTERPOLATION_DEPTH {
        if !value.contains("%(") {
            return Ok(value);
        }
        value = substitute(&value, &lookup)?;
    }
    if value.contains("%(") {
        return Err(InterpolationFailure::Depth);
    }
    Ok(value)
}

fn substitute<'a, F>(value: &str, lookup: &F) -> Result<String, InterpolationFailure>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(tail) = after.strip_prefix('%') {
            out.push('%');
            rest = tail;
        } else if let Some(tail) = after.strip_prefix('(') {
            let close = tail.find(')').ok_or_else(|| {
                InterpolationFailure::Syntax(format!("unterminated reference in '{value}'"))
            })?;
            let name = &tail[..close];
            let tail = tail[close + 1..].strip_prefix('s').ok_or_else(|| {
                InterpolationFailure::Syntax(format!("reference '%({name})' must end with 's'"))
            })?;
            let replacement =
                lookup(name).ok_or_else(|| InterpolationFailure::Missing(name.to_string()))?;
            out.push_str(replacement);
            rest = tail;
        } else {
            return Err(InterpolationFailure::Syntax(format!(
                "'%' must be followed by '%' or '(' in '{value}'"
            )));
        }
    }

    out.push_str(rest);
    Ok(out)
}
