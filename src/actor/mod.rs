//! Remote actor resolution
//!
//! Dereferences actor references (`attributedTo`, `actor`, …) through an
//! injected fetch backend. A single unreachable remote actor must never
//! abort rendering of an otherwise-valid page, so every failure class maps
//! to a renderable marker instead of propagating:
//!
//! - remote says deleted or never-existed → [`ResolvedActor::Tombstone`]
//!   ("deleted user" placeholder)
//! - anything else (network, garbage response, timeout) →
//!   [`ResolvedActor::Failed`] carrying a diagnostic

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::types::Document;

/// Errors a fetch backend may report.
///
/// `NotFound` and `Gone` are distinct remote-lifecycle conditions (never
/// existed vs deleted) but render identically downstream.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("gone: {0}")]
    Gone(String),

    #[error("fetch failed: {0}")]
    Other(String),
}

/// Backend that dereferences an identifier to a federated document.
///
/// The crate imposes no timeout or retry policy; a failure from the
/// backend is terminal for that single call.
#[async_trait::async_trait]
pub trait ActorFetcher: Send + Sync {
    async fn fetch(&self, iri: &str) -> Result<Document, FetchError>;
}

/// Outcome of dereferencing an actor reference.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedActor {
    /// Hydrated actor document
    Actor(Document),
    /// Remote confirmed the actor deleted or never-existed
    Tombstone { id: String },
    /// Remote unreachable or response unusable
    Failed { id: String, detail: String },
}

/// Resolves actor references through an [`ActorFetcher`].
pub struct ActorResolver {
    fetcher: Arc<dyn ActorFetcher>,
}

impl ActorResolver {
    pub fn new(fetcher: Arc<dyn ActorFetcher>) -> Self {
        Self { fetcher }
    }

    /// Dereference an actor reference.
    ///
    /// The reference may be absent/null ("no actor" is valid → `None`), a
    /// sequence (first element wins), a mapping (its `id` is used), or a
    /// plain identifier string.
    pub async fn resolve(&self, actor_ref: Option<&Value>) -> Option<ResolvedActor> {
        let id = normalize_ref(actor_ref)?;
        debug!(actor = %id, "resolving remote actor");

        match self.fetcher.fetch(&id).await {
            Ok(doc) => Some(ResolvedActor::Actor(doc)),
            Err(FetchError::NotFound(_)) | Err(FetchError::Gone(_)) => {
                debug!(actor = %id, "remote actor is gone");
                Some(ResolvedActor::Tombstone { id })
            }
            Err(err) => {
                warn!(actor = %id, error = %err, "remote actor fetch failed");
                Some(ResolvedActor::Failed {
                    id,
                    detail: err.to_string(),
                })
            }
        }
    }
}

/// Collapse the reference union down to a single identifier string.
fn normalize_ref(actor_ref: Option<&Value>) -> Option<String> {
    let mut value = actor_ref?;
    if let Value::Array(items) = value {
        value = items.first()?;
    }
    match value {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Object(map) => map
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}
