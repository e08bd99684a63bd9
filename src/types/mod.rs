//! Shared types for the rendering core

mod error;

pub use error::{RenderError, Result};

/// A federated social object as it arrives off the wire or out of storage.
///
/// Documents are read-only to this crate and deliberately stay loosely
/// typed: field shapes vary across server implementations (a `url` may be a
/// string, a link mapping, or a list of link mappings), so normalization
/// happens at the accessors in [`crate::document`] rather than at the type
/// boundary.
pub type Document = serde_json::Value;
