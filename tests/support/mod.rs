// tests/support/mod.rs
// Shared by multiple integration test binaries; some helpers are unused in
// any given binary, which would otherwise trip dead_code warnings.
#![allow(dead_code)]

pub mod mocks;

use article_feed::application::ports::{
    FileUrlGeneratorPort, ImageStyleRegistryPort, RouteResolverPort,
};
use article_feed::application::queries::articles::{ARTICLE_IMAGE_STYLE, ArticleListQueryService};
use article_feed::application::services::ApplicationServices;
use article_feed::domain::content::{CacheMetadata, ContentStore};
use article_feed::infrastructure::images::{PathImageStyleRegistry, SiteFileUrlGenerator};
use article_feed::infrastructure::routing::SiteRouteResolver;
use article_feed::presentation::http::{routes::build_router, state::HttpState};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, response::Parts};
use once_cell::sync::Lazy;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const SITE: &str = "https://site.example";

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .try_init();
});

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

pub fn base_cache() -> CacheMetadata {
    CacheMetadata::new().with_tag("content_list:article")
}

pub fn default_styles() -> Arc<ImageStyleRegistryPort> {
    Arc::new(PathImageStyleRegistry::new(
        SITE,
        [ARTICLE_IMAGE_STYLE.to_owned()],
    ))
}

/// Registry without the "article" style, as if it had been deleted.
pub fn empty_styles() -> Arc<ImageStyleRegistryPort> {
    Arc::new(PathImageStyleRegistry::new(SITE, std::iter::empty()))
}

pub fn make_service(
    store: Arc<dyn ContentStore>,
    styles: Arc<ImageStyleRegistryPort>,
    base_cache: CacheMetadata,
) -> ArticleListQueryService {
    init_tracing();
    let routes: Arc<RouteResolverPort> = Arc::new(SiteRouteResolver::new(SITE));
    let file_urls: Arc<FileUrlGeneratorPort> = Arc::new(SiteFileUrlGenerator::new(SITE));
    ArticleListQueryService::new(store, routes, styles, file_urls, base_cache)
}

pub fn make_router(
    store: Arc<dyn ContentStore>,
    styles: Arc<ImageStyleRegistryPort>,
    base_cache: CacheMetadata,
) -> Router {
    init_tracing();
    let routes: Arc<RouteResolverPort> = Arc::new(SiteRouteResolver::new(SITE));
    let file_urls: Arc<FileUrlGeneratorPort> = Arc::new(SiteFileUrlGenerator::new(SITE));
    let services = Arc::new(ApplicationServices::new(
        store, routes, styles, file_urls, base_cache,
    ));
    build_router(HttpState { services })
}

/// Issue `GET uri` against the router and return the response head and body.
pub async fn get(app: Router, uri: &str) -> (Parts, Vec<u8>) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
    (parts, bytes.to_vec())
}
