//! Media resolution - remote URL to locally cached rendition
//!
//! Maps a (kind, source URL, size) triple to a local media route when the
//! external cache store holds a matching rendition, falling back to
//! hot-linking the original URL when it does not: broken caching must never
//! block rendering.
//!
//! Resolved routes are memoized in an instance-owned map so repeated
//! renders of the same avatar or attachment skip the backing-store round
//! trip. The memo is monotonic (entries are never invalidated; only a new
//! resolver starts fresh) and races on a key are benign: both writers
//! derive the same route from the same key.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, warn};

/// What a cached rendition is used for. Renditions of the same source URL
/// are cached separately per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    ActorIcon,
    Attachment,
    OgImage,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ActorIcon => "actor_icon",
            Self::Attachment => "attachment",
            Self::OgImage => "og_image",
        }
    }
}

/// Identifies one cached rendition: kind + source URL + optional target
/// dimension (`None` = default/original size).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaKey {
    pub kind: MediaKind,
    pub url: String,
    pub size: Option<u32>,
}

impl MediaKey {
    pub fn new(kind: MediaKind, url: &str, size: Option<u32>) -> Self {
        Self {
            kind,
            url: url.to_string(),
            size,
        }
    }
}

/// External store of cached renditions.
///
/// Read-only from this crate's perspective: population is an external
/// pipeline's responsibility. `lookup` returns the rendition's opaque
/// (content-addressed) identifier, or `None` when no matching rendition
/// exists.
#[async_trait::async_trait]
pub trait MediaStore: Send + Sync {
    async fn lookup(&self, url: &str, size: Option<u32>, kind: MediaKind) -> Option<String>;
}

/// Configuration for [`MediaResolver`]
#[derive(Debug, Clone)]
pub struct MediaResolverConfig {
    /// Route prefix local renditions are served under (default: `/media`)
    pub route_prefix: String,
    /// Target dimension for Open Graph preview images (default: 100)
    pub og_image_size: u32,
}

impl Default for MediaResolverConfig {
    fn default() -> Self {
        Self {
            route_prefix: "/media".to_string(),
            og_image_size: 100,
        }
    }
}

/// Resolves remote media URLs to local cached-rendition routes.
pub struct MediaResolver {
    store: Arc<dyn MediaStore>,
    memo: DashMap<MediaKey, String>,
    config: MediaResolverConfig,
}

impl MediaResolver {
    pub fn new(store: Arc<dyn MediaStore>) -> Self {
        Self::with_config(store, MediaResolverConfig::default())
    }

    pub fn with_config(store: Arc<dyn MediaStore>, config: MediaResolverConfig) -> Self {
        Self {
            store,
            memo: DashMap::new(),
            config,
        }
    }

    /// Resolve a source URL to a local rendition route.
    ///
    /// Memo hit → local route, no store access. Store hit → local route,
    /// memoized. Store miss → the original URL unchanged, with a
    /// diagnostic; the page degrades to hot-linking the remote resource.
    pub async fn resolve(&self, url: &str, size: Option<u32>, kind: MediaKind) -> String {
        let key = MediaKey::new(kind, url, size);
        if let Some(local) = self.memo.get(&key) {
            return local.clone();
        }

        match self.store.lookup(url, size, kind).await {
            Some(rendition_id) => {
                let local = format!("{}/{}", self.config.route_prefix, rendition_id);
                debug!(url = %url, kind = kind.as_str(), local = %local, "media rendition resolved");
                self.memo.insert(key, local.clone());
                local
            }
            None => {
                warn!(
                    url = %url,
                    size = ?size,
                    kind = kind.as_str(),
                    "cache not available, hot-linking original"
                );
                url.to_string()
            }
        }
    }

    /// Local route for an actor's avatar.
    pub async fn actor_icon_url(&self, url: &str, size: Option<u32>) -> String {
        self.resolve(url, size, MediaKind::ActorIcon).await
    }

    /// Local route for a post attachment.
    pub async fn attachment_url(&self, url: &str, size: Option<u32>) -> String {
        self.resolve(url, size, MediaKind::Attachment).await
    }

    /// Local route for an Open Graph preview image.
    ///
    /// Cosmetic path: total over any input, returns an empty string rather
    /// than ever failing a render over a link preview.
    pub async fn og_image_url(&self, url: &str) -> String {
        if url.is_empty() {
            return String::new();
        }
        self.resolve(url, Some(self.config.og_image_size), MediaKind::OgImage)
            .await
    }

    /// Number of memoized renditions (diagnostics).
    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }
}
