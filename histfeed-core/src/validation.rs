//! Parameter validation — pure checks run before any request is built.
//!
//! Three operations, all synchronous, side-effect free, and reentrant:
//! enum coercion, optional enum coercion, and gateway URL normalization.
//! Request-construction code calls these first, so a bad value fails the
//! request path before a single network resource is acquired.

use crate::enums::ParamEnum;
use crate::error::{Error, Result};

/// An enum-valued parameter as the caller supplied it: either a variant or
/// its canonical string form.
#[derive(Debug, Clone)]
pub enum ParamValue<E: ParamEnum> {
    Member(E),
    Name(String),
}

impl<E: ParamEnum> From<E> for ParamValue<E> {
    fn from(member: E) -> Self {
        ParamValue::Member(member)
    }
}

impl<E: ParamEnum> From<&str> for ParamValue<E> {
    fn from(name: &str) -> Self {
        ParamValue::Name(name.to_string())
    }
}

impl<E: ParamEnum> From<String> for ParamValue<E> {
    fn from(name: String) -> Self {
        ParamValue::Name(name)
    }
}

/// Resolve `value` to a member of `E`.
///
/// A variant resolves to itself; a string must equal one variant's
/// canonical form exactly. On failure the error names `param`, quotes the
/// offending value, and lists every accepted canonical string in declared
/// order.
pub fn validate_enum<E, V>(value: V, param: &str) -> Result<E>
where
    E: ParamEnum,
    V: Into<ParamValue<E>>,
{
    match value.into() {
        ParamValue::Member(member) => Ok(member),
        ParamValue::Name(name) => {
            E::lookup(&name).ok_or_else(|| invalid_enum::<E>(&name, param))
        }
    }
}

/// Like [`validate_enum`], but absence is always legal.
///
/// `None` returns `Ok(None)` immediately, without consulting `E`'s variant
/// table. This is not the same as coercing absence into the enum — absence
/// never fails, for any enum.
pub fn validate_maybe_enum<E, V>(value: Option<V>, param: &str) -> Result<Option<E>>
where
    E: ParamEnum,
    V: Into<ParamValue<E>>,
{
    match value {
        None => Ok(None),
        Some(value) => validate_enum(value, param).map(Some),
    }
}

fn invalid_enum<E: ParamEnum>(value: &str, param: &str) -> Error {
    let accepted: Vec<&str> = E::VARIANTS.iter().map(|v| v.as_str()).collect();
    Error::invalid_parameter(
        param,
        format!(
            "'{value}' is not a valid {}. Use any of [{}]",
            E::NAME,
            accepted.join(", ")
        ),
    )
}

/// Normalize a gateway endpoint URL.
///
/// Accepts a bare host, a host with path, a fully qualified URL, or a bare
/// path, and always yields a single absolute URL with the scheme forced to
/// `https`. Query and fragment are discarded. In order:
///
/// 1. neither network-location nor path present → `InvalidParameter`;
/// 2. network-location present → `https://` + netloc + original path;
/// 3. otherwise the whole remaining string — slashes, ports and all —
///    becomes the authority verbatim, with an empty path.
pub fn validate_gateway(url: &str) -> Result<String> {
    let (netloc, path) = split_url(url);

    if netloc.is_empty() && path.is_empty() {
        return Err(Error::invalid_parameter(
            "gateway",
            format!("`{url}` is not a valid URL"),
        ));
    }

    if !netloc.is_empty() {
        Ok(format!("https://{netloc}{path}"))
    } else {
        Ok(format!("https://{path}"))
    }
}

/// Split a URL-ish string into (network-location, path), dropping the
/// scheme, query, and fragment.
///
/// A `scheme:` prefix is stripped only when a `//` authority follows it.
/// A bare `host:1234` names a network location the caller meant literally,
/// not a scheme, and survives intact into the path position.
fn split_url(url: &str) -> (&str, &str) {
    let mut rest = url;
    if let Some(i) = rest.find('#') {
        rest = &rest[..i];
    }
    if let Some(i) = rest.find('?') {
        rest = &rest[..i];
    }
    if let Some(i) = rest.find(':') {
        if is_scheme(&rest[..i]) && rest[i + 1..].starts_with("//") {
            rest = &rest[i + 1..];
        }
    }
    match rest.strip_prefix("//") {
        Some(after) => match after.find('/') {
            Some(i) => (&after[..i], &after[i..]),
            None => (after, ""),
        },
        None => ("", rest),
    }
}

/// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
