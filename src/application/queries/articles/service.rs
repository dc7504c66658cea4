// src/application/queries/articles/service.rs
use crate::application::ports::{FileUrlGeneratorPort, ImageStyleRegistryPort, RouteResolverPort};
use crate::domain::content::{CacheMetadata, ContentStore};
use std::sync::Arc;

/// Read-side orchestration for the article listing.
///
/// Stateless across requests: every call builds its own fingerprint and
/// record list; the injected handles are shared service objects, not
/// session state.
pub struct ArticleListQueryService {
    pub(super) store: Arc<dyn ContentStore>,
    pub(super) routes: Arc<RouteResolverPort>,
    pub(super) styles: Arc<ImageStyleRegistryPort>,
    pub(super) file_urls: Arc<FileUrlGeneratorPort>,
    pub(super) base_cache: CacheMetadata,
}

impl ArticleListQueryService {
    pub fn new(
        store: Arc<dyn ContentStore>,
        routes: Arc<RouteResolverPort>,
        styles: Arc<ImageStyleRegistryPort>,
        file_urls: Arc<FileUrlGeneratorPort>,
        base_cache: CacheMetadata,
    ) -> Self {
        Self {
            store,
            routes,
            styles,
            file_urls,
            base_cache,
        }
    }
}
