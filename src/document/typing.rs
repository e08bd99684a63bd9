//! Type-tag matching for federated documents
//!
//! A document's `type` field may be a single tag (`"Note"`) or a list of
//! tags (`["Person", "Actor"]`) depending on the originating server. Both
//! sides of every comparison are normalized to sequences first.

use serde_json::Value;

/// Actor-category type tags, in ActivityStreams order.
pub const ACTOR_TYPES: [&str; 6] = [
    "Application",
    "Group",
    "Organization",
    "Person",
    "Service",
    "Question",
];

/// Tags in [`ACTOR_TYPES`] that are NOT treated as actors by default.
///
/// Mastodon delivers poll-result updates as activities attributed to the
/// `Question` itself, so a `Question` type tag does not reliably mean
/// "actor". Unclear whether Pleroma shares the quirk; the exclusion stays
/// an explicit list rather than inferred logic, and callers who know their
/// peers can override it via [`has_actor_type_excluding`].
pub const ACTOR_TYPE_EXCEPTIONS: [&str; 1] = ["Question"];

/// Normalize a type field (or any scalar-or-sequence value) to a list of
/// string tags. Missing and non-string entries normalize away.
pub fn type_tags(value: Option<&Value>) -> Vec<&str> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::String(s)) => vec![s.as_str()],
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        Some(_) => Vec::new(),
    }
}

/// True iff `doc` declares at least one of `wanted`.
///
/// `wanted` may itself be a scalar tag or a sequence of tags; a document
/// without a `type` field matches nothing.
pub fn has_type(doc: &Value, wanted: &Value) -> bool {
    let declared = type_tags(doc.get("type"));
    if declared.is_empty() {
        return false;
    }
    type_tags(Some(wanted))
        .iter()
        .any(|w| declared.contains(w))
}

/// Convenience for matching against plain string tags.
pub fn has_type_str(doc: &Value, wanted: &str) -> bool {
    type_tags(doc.get("type")).contains(&wanted)
}

/// True iff `doc` declares an actor-category type, minus the default
/// exception list ([`ACTOR_TYPE_EXCEPTIONS`]).
pub fn has_actor_type(doc: &Value) -> bool {
    has_actor_type_excluding(doc, &ACTOR_TYPE_EXCEPTIONS)
}

/// [`has_actor_type`] with a caller-supplied exception list.
pub fn has_actor_type_excluding(doc: &Value, excluded: &[&str]) -> bool {
    ACTOR_TYPES
        .iter()
        .filter(|t| !excluded.contains(t))
        .any(|t| has_type_str(doc, t))
}
