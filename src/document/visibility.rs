//! Audience classification
//!
//! ActivityPub encodes visibility through the `to`/`cc` audience fields
//! rather than a dedicated flag: the special public collection IRI in `to`
//! means public, in `cc` means unlisted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::typing::type_tags;

/// The ActivityStreams public collection IRI.
pub const AS_PUBLIC: &str = "https://www.w3.org/ns/activitystreams#Public";

/// Visibility of a federated object, from broadest to narrowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    Public,
    Unlisted,
    FollowersOnly,
    Direct,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Unlisted => "unlisted",
            Self::FollowersOnly => "followers-only",
            Self::Direct => "direct",
        }
    }

    /// Public and unlisted objects are both world-readable.
    pub fn is_public(self) -> bool {
        matches!(self, Self::Public | Self::Unlisted)
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "public" | "PUBLIC" => Some(Self::Public),
            "unlisted" | "UNLISTED" => Some(Self::Unlisted),
            "followers-only" | "FOLLOWERS_ONLY" => Some(Self::FollowersOnly),
            "direct" | "DIRECT" => Some(Self::Direct),
            _ => None,
        }
    }
}

/// Classify a document's visibility from its audience fields.
///
/// `followers_iri` is the author's followers-collection IRI when known;
/// without it, a non-public audience cannot be told apart from a direct
/// message and classifies as [`Visibility::Direct`].
pub fn visibility_of(doc: &Value, followers_iri: Option<&str>) -> Visibility {
    let to = type_tags(doc.get("to"));
    let cc = type_tags(doc.get("cc"));

    if to.contains(&AS_PUBLIC) {
        return Visibility::Public;
    }
    if cc.contains(&AS_PUBLIC) {
        return Visibility::Unlisted;
    }
    if let Some(followers) = followers_iri {
        if to.contains(&followers) || cc.contains(&followers) {
            return Visibility::FollowersOnly;
        }
    }
    Visibility::Direct
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_public_in_to() {
        let doc = json!({"to": [AS_PUBLIC], "cc": ["https://social.example/followers"]});
        assert_eq!(visibility_of(&doc, None), Visibility::Public);
    }

    #[test]
    fn test_public_in_cc_is_unlisted() {
        let doc = json!({"to": ["https://social.example/followers"], "cc": [AS_PUBLIC]});
        assert_eq!(visibility_of(&doc, None), Visibility::Unlisted);
    }

    #[test]
    fn test_scalar_audience_field() {
        // Some servers send `to` as a bare string
        let doc = json!({"to": AS_PUBLIC});
        assert_eq!(visibility_of(&doc, None), Visibility::Public);
    }

    #[test]
    fn test_followers_only_requires_known_iri() {
        let followers = "https://social.example/followers";
        let doc = json!({"to": [followers]});
        assert_eq!(
            visibility_of(&doc, Some(followers)),
            Visibility::FollowersOnly
        );
        assert_eq!(visibility_of(&doc, None), Visibility::Direct);
    }

    #[test]
    fn test_no_audience_is_direct() {
        assert_eq!(visibility_of(&json!({}), None), Visibility::Direct);
    }

    #[test]
    fn test_is_public() {
        assert!(Visibility::Public.is_public());
        assert!(Visibility::Unlisted.is_public());
        assert!(!Visibility::FollowersOnly.is_public());
        assert!(!Visibility::Direct.is_public());
    }

    #[test]
    fn test_serde_names_match_as_str() {
        let json = serde_json::to_string(&Visibility::FollowersOnly).unwrap();
        assert_eq!(json, format!("\"{}\"", Visibility::FollowersOnly.as_str()));
    }

    #[test]
    fn test_parse_round_trip() {
        for v in [
            Visibility::Public,
            Visibility::Unlisted,
            Visibility::FollowersOnly,
            Visibility::Direct,
        ] {
            assert_eq!(Visibility::parse(v.as_str()), Some(v));
        }
        assert_eq!(Visibility::parse("limited"), None);
    }
}
