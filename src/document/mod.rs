//! Shape-tolerant document normalization
//!
//! Everything in this module is a pure, total function over
//! [`serde_json::Value`] documents. Remote servers disagree about field
//! shapes (scalar vs list, string vs link object), so each accessor
//! normalizes its input instead of assuming one shape; garbled remote data
//! degrades to an empty/false default rather than an error, except where
//! the caller contract genuinely requires a field (see
//! [`links::resolve_link`]).

pub mod links;
pub mod timestamps;
pub mod typing;
pub mod visibility;

pub use links::{
    extract_video_link, has_non_image_attachment, is_image_filename, is_local_id,
    pick_html_variant, resolve_link, resolve_target,
};
pub use timestamps::{format_timestamp, parse_timestamp};
pub use typing::{
    has_actor_type, has_actor_type_excluding, has_type, type_tags, ACTOR_TYPES,
    ACTOR_TYPE_EXCEPTIONS,
};
pub use visibility::{visibility_of, Visibility, AS_PUBLIC};
