use crate::error::{Error, Result};
use crate::xml::Node;
use std::str::FromStr;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Marker the service writes in place of an absent optional value.
pub const NULL: &str = "NULL";

fn coercion(field: &'static str, raw: &str) -> Error {
    Error::Coercion {
        field,
        raw: raw.to_owned(),
    }
}

pub fn raw<'a>(node: &'a Node, field: &'static str) -> Result<&'a str> {
    node.get(field)
        .and_then(Node::text)
        .ok_or(Error::MissingField(field))
}

pub fn string(node: &Node, field: &'static str) -> Result<String> {
    raw(node, field).map(str::to_owned)
}

pub fn parse_as<T: FromStr>(field: &'static str, raw: &str) -> Result<T> {
    raw.parse().map_err(|_| coercion(field, raw))
}

/// Integers and enum codes alike go through `FromStr`.
pub fn value<T: FromStr>(node: &Node, field: &'static str) -> Result<T> {
    parse_as(field, raw(node, field)?)
}

pub fn timestamp(node: &Node, field: &'static str) -> Result<OffsetDateTime> {
    let raw = raw(node, field)?;
    parse_timestamp(raw).ok_or_else(|| coercion(field, raw))
}

/// `2008-06-13 20:45:53.0`, fraction optional, always UTC.
fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let with_fraction =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]");
    let plain = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    PrimitiveDateTime::parse(raw, with_fraction)
        .or_else(|_| PrimitiveDateTime::parse(raw, plain))
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}

/// Absent element and [`NULL`] both decode to `None`.
pub fn optional<T>(
    node: &Node,
    field: &'static str,
    f: impl FnOnce(&str) -> Result<T>,
) -> Result<Option<T>> {
    match node.get(field) {
        None => Ok(None),
        Some(_) => match raw(node, field)? {
            NULL => Ok(None),
            s => f(s).map(Some),
        },
    }
}

/// Asset tags: `"space, cute, blue"`. Never empty; a marker with no usable
/// piece is kept whole.
pub fn comma_list(raw: &str) -> Vec<String> {
    let tags: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();
    if tags.is_empty() {
        vec![raw.to_owned()]
    } else {
        tags
    }
}

/// Sporecast tags: any run of non-word characters separates.
pub fn word_list(raw: &str) -> Vec<String> {
    raw.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
