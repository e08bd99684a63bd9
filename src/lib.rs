//! Fedlens - rendering-support core for federated social objects
//!
//! Federated (ActivityPub-style) documents arrive loosely typed: a field may
//! be a string, a mapping, a list of mappings, or missing entirely, and the
//! remote side may be gone, broken, or lying. Fedlens turns those documents
//! into stable, renderable values without ever letting one bad field take a
//! page down.
//!
//! ## Modules
//!
//! - **document**: shape-tolerant normalization (types, links, audience,
//!   timestamps) over `serde_json::Value` documents
//! - **actor**: remote actor dereferencing with tombstone/error degradation
//! - **media**: cached-rendition resolution with an in-process memo and
//!   hot-link fallback
//! - **poll**: vote tallies from cached aggregates or embedded reply counts

pub mod actor;
pub mod document;
pub mod media;
pub mod poll;
pub mod types;

pub use actor::{ActorFetcher, ActorResolver, FetchError, ResolvedActor};
pub use media::{MediaKind, MediaResolver, MediaResolverConfig, MediaStore};
pub use types::{Document, RenderError, Result};
