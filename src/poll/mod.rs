//! Poll vote tallies
//!
//! Counts come from two places: cached aggregates maintained by the update
//! pipeline (authoritative when present and non-zero, since it is refreshed
//! whenever new replies arrive), and the reply totals embedded in the poll
//! options themselves (possibly stale, used as the fallback). Exclusive
//! polls carry their options in `oneOf`, multi-select polls in `anyOf`.

use serde_json::Value;

/// Normalized key a choice is tallied under in the aggregate map.
pub fn answer_key(choice: &str) -> String {
    choice.trim().to_string()
}

/// Vote count for one choice.
///
/// Prefers the cached aggregate (`meta["question_answers"]`); falls back to
/// the matching option's embedded reply total, defaulting to 0.
pub fn count_choice(choice: &str, doc: &Value, meta: &Value) -> u64 {
    let cached = meta
        .get("question_answers")
        .and_then(|answers| answers.get(answer_key(choice)))
        .and_then(Value::as_u64)
        .unwrap_or(0);
    if cached > 0 {
        return cached;
    }

    options_of(doc, &["oneOf", "anyOf"])
        .iter()
        .find(|option| option.get("name").and_then(Value::as_str) == Some(choice))
        .map(|option| embedded_total(option))
        .unwrap_or(0)
}

/// Total votes across all choices.
///
/// Prefers the cached `meta["question_replies"]`; falls back to summing
/// embedded reply totals over the option list.
pub fn count_total(doc: &Value, meta: &Value) -> u64 {
    let cached = meta
        .get("question_replies")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    if cached > 0 {
        return cached;
    }

    options_of(doc, &["anyOf", "oneOf"])
        .iter()
        .map(|option| embedded_total(option))
        .sum()
}

/// Option list from the first present field, in the given precedence order.
fn options_of<'a>(doc: &'a Value, fields: &[&str]) -> &'a [Value] {
    fields
        .iter()
        .find_map(|field| doc.get(field).and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn embedded_total(option: &Value) -> u64 {
    option
        .get("replies")
        .and_then(|r| r.get("totalItems"))
        .and_then(Value::as_u64)
        .unwrap_or(0)
}
