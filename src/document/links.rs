//! Link-like field normalization
//!
//! A "link" in a federated document can be a bare URL string, a link
//! mapping (`{"href": …, "mimeType": …}`), or a list of link mappings
//! offering alternate representations. The extractors here collapse that
//! union into plain strings for the template layer.

use serde_json::Value;
use tracing::warn;

use crate::types::{RenderError, Result};

/// Filename suffixes treated as images (gallery-renderable).
const IMAGE_EXTENSIONS: [&str; 5] = [".png", ".jpg", ".jpeg", ".gif", ".svg"];

/// Resolve a link-like value to its destination URL.
///
/// Strings pass through; mappings must carry `href` (a link without a
/// destination is a caller contract violation, so that one propagates);
/// sequences are narrowed via [`pick_html_variant`] first. Any other shape
/// is upstream protocol drift: it is logged for triage and degrades to an
/// empty string rather than aborting the render.
pub fn resolve_link(value: &Value) -> Result<String> {
    match value {
        Value::String(url) => Ok(url.clone()),
        Value::Object(map) => match map.get("href") {
            Some(Value::String(href)) => Ok(href.clone()),
            Some(other) => {
                warn!(shape = %shape_of(other), "link mapping has a non-string href");
                Ok(String::new())
            }
            None => Err(RenderError::MissingField {
                field: "href",
                context: "link mapping",
            }),
        },
        Value::Array(_) => {
            let picked = pick_html_variant(value);
            if picked.is_array() {
                // No HTML-flavored variant to narrow to
                warn!(shape = "array", "unresolvable link sequence");
                Ok(String::new())
            } else {
                resolve_link(picked)
            }
        }
        other => {
            warn!(shape = %shape_of(other), "unrecognized link shape");
            Ok(String::new())
        }
    }
}

/// Resolve a reference mapping to a display target: `url`, else `id`,
/// else empty. Non-mappings resolve to empty. Total, never errors.
pub fn resolve_target(value: &Value) -> String {
    let Value::Object(map) = value else {
        return String::new();
    };
    map.get("url")
        .and_then(Value::as_str)
        .or_else(|| map.get("id").and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}

/// Given a sequence of link mappings, prefer the first HTML-flavored one.
///
/// Returns the input unchanged when nothing matches (or the input is not a
/// sequence): prefer the richer representation if present, else don't fail.
pub fn pick_html_variant(links: &Value) -> &Value {
    if let Value::Array(items) = links {
        for link in items {
            if mime_of(link).is_some_and(|m| m.starts_with("text/html")) {
                return link;
            }
        }
    }
    links
}

/// First `href` in a link sequence whose MIME type denotes video.
pub fn extract_video_link(links: &Value) -> Option<String> {
    let items = links.as_array()?;
    items
        .iter()
        .find(|link| mime_of(link).is_some_and(|m| m.starts_with("video/")))
        .and_then(|link| link.get("href"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Case-insensitive image-suffix test.
pub fn is_image_filename(name: &str) -> bool {
    let lowered = name.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext))
}

/// True iff at least one attachment is not an image.
///
/// Attachments come as strings or as mappings with a `url` field. Used to
/// suppress gallery-only layouts that would hide non-image content.
pub fn has_non_image_attachment(attachments: &Value) -> bool {
    let Some(items) = attachments.as_array() else {
        return false;
    };
    items.iter().any(|a| match a {
        Value::String(url) => !is_image_filename(url),
        Value::Object(map) => map
            .get("url")
            .and_then(Value::as_str)
            .is_some_and(|url| !is_image_filename(url)),
        _ => false,
    })
}

/// True iff `id` belongs to the local instance (originated in our outbox).
pub fn is_local_id(id: &str, base_iri: &str) -> bool {
    id.starts_with(base_iri)
}

/// MIME type of a link mapping. Accepts both `mimeType` (seen on the wire
/// from older servers) and `mediaType` (ActivityStreams canonical).
fn mime_of(link: &Value) -> Option<&str> {
    link.get("mimeType")
        .or_else(|| link.get("mediaType"))
        .and_then(Value::as_str)
}

fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_link_string_passthrough() {
        let link = json!("https://remote.example/video.mp4");
        assert_eq!(
            resolve_link(&link).unwrap(),
            "https://remote.example/video.mp4"
        );
    }

    #[test]
    fn test_resolve_link_mapping_href() {
        let link = json!({"href": "https://remote.example/post", "mimeType": "text/html"});
        assert_eq!(resolve_link(&link).unwrap(), "https://remote.example/post");
    }

    #[test]
    fn test_resolve_link_missing_href_propagates() {
        let link = json!({"mimeType": "text/html"});
        let err = resolve_link(&link).unwrap_err();
        assert!(matches!(
            err,
            RenderError::MissingField { field: "href", .. }
        ));
    }

    #[test]
    fn test_resolve_link_picks_html_variant() {
        let links = json!([
            {"href": "https://remote.example/v.mpd", "mimeType": "application/dash+xml"},
            {"href": "https://remote.example/watch", "mimeType": "text/html"},
        ]);
        assert_eq!(resolve_link(&links).unwrap(), "https://remote.example/watch");
    }

    #[test]
    fn test_resolve_link_sequence_without_html_degrades() {
        let links = json!([
            {"href": "https://remote.example/v.mpd", "mimeType": "application/dash+xml"},
        ]);
        assert_eq!(resolve_link(&links).unwrap(), "");
    }

    #[test]
    fn test_resolve_link_garbage_degrades() {
        assert_eq!(resolve_link(&json!(42)).unwrap(), "");
        assert_eq!(resolve_link(&Value::Null).unwrap(), "");
    }

    #[test]
    fn test_resolve_target_precedence() {
        assert_eq!(resolve_target(&json!({"url": "A", "id": "B"})), "A");
        assert_eq!(resolve_target(&json!({"id": "B"})), "B");
        assert_eq!(resolve_target(&json!({})), "");
        assert_eq!(resolve_target(&json!("not-a-mapping")), "");
    }

    #[test]
    fn test_pick_html_variant_passthrough() {
        let links = json!([{"href": "x", "mimeType": "video/mp4"}]);
        assert_eq!(pick_html_variant(&links), &links);
    }

    #[test]
    fn test_pick_html_variant_accepts_media_type_field() {
        let links = json!([
            {"href": "https://remote.example/raw", "mediaType": "video/mp4"},
            {"href": "https://remote.example/page", "mediaType": "text/html; charset=utf-8"},
        ]);
        assert_eq!(
            pick_html_variant(&links),
            &json!({"href": "https://remote.example/page", "mediaType": "text/html; charset=utf-8"})
        );
    }

    #[test]
    fn test_extract_video_link() {
        let links = json!([
            {"href": "https://remote.example/watch", "mimeType": "text/html"},
            {"href": "https://remote.example/v1.mp4", "mimeType": "video/mp4"},
            {"href": "https://remote.example/v2.webm", "mimeType": "video/webm"},
        ]);
        assert_eq!(
            extract_video_link(&links),
            Some("https://remote.example/v1.mp4".to_string())
        );
    }

    #[test]
    fn test_extract_video_link_none() {
        let links = json!([{"href": "x", "mimeType": "text/html"}]);
        assert_eq!(extract_video_link(&links), None);
        assert_eq!(extract_video_link(&json!("not-a-list")), None);
    }

    #[test]
    fn test_is_image_filename_case_insensitive() {
        assert!(is_image_filename("X.PNG"));
        assert!(is_image_filename("x.png"));
        assert!(is_image_filename("photo.JPeG"));
        assert!(is_image_filename("vector.svg"));
        assert!(!is_image_filename("x.txt"));
        assert!(!is_image_filename("archive.tar.gz"));
    }

    #[test]
    fn test_has_non_image_attachment() {
        assert!(has_non_image_attachment(&json!([
            {"url": "https://remote.example/a.png"},
            {"url": "https://remote.example/notes.pdf"},
        ])));
        assert!(!has_non_image_attachment(&json!([
            {"url": "https://remote.example/a.png"},
            "https://remote.example/b.gif",
        ])));
        assert!(has_non_image_attachment(&json!([
            "https://remote.example/track.ogg",
        ])));
        assert!(!has_non_image_attachment(&json!([])));
        assert!(!has_non_image_attachment(&json!("not-a-list")));
    }

    #[test]
    fn test_is_local_id() {
        assert!(is_local_id(
            "https://social.example/outbox/1",
            "https://social.example"
        ));
        assert!(!is_local_id(
            "https://remote.example/note/1",
            "https://social.example"
        ));
    }
}
