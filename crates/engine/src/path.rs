//! Dot-path resolution over a JSON context.

use serde_json::Value;

/// Resolve a dot-separated `field` against `context`.
///
/// Objects are indexed by key and arrays by canonical decimal index.
/// Returns `None` (JS `undefined`) as soon as a segment cannot be followed,
/// including when an intermediate value is `null` or a scalar.
pub fn resolve_path<'a>(context: &'a Value, field: &str) -> Option<&'a Value> {
    field
        .split('.')
        .try_fold(context, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => array_index(segment).and_then(|idx| items.get(idx)),
            _ => None,
        })
}

/// "01" or "+1" are property names, not indices.
fn array_index(segment: &str) -> Option<usize> {
    segment
        .parse::<usize>()
        .ok()
        .filter(|idx| idx.to_string() == segment)
}
