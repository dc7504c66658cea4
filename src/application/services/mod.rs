// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::ports::{FileUrlGeneratorPort, ImageStyleRegistryPort, RouteResolverPort};
use crate::application::queries::articles::ArticleListQueryService;
use crate::domain::content::{CacheMetadata, ContentStore};

pub struct ApplicationServices {
    pub article_queries: Arc<ArticleListQueryService>,
}

impl ApplicationServices {
    pub fn new(
        store: Arc<dyn ContentStore>,
        routes: Arc<RouteResolverPort>,
        styles: Arc<ImageStyleRegistryPort>,
        file_urls: Arc<FileUrlGeneratorPort>,
        base_cache: CacheMetadata,
    ) -> Self {
        let article_queries = Arc::new(ArticleListQueryService::new(
            store, routes, styles, file_urls, base_cache,
        ));

        Self { article_queries }
    }
}
