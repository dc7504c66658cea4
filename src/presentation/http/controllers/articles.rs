// src/presentation/http/controllers/articles.rs
use crate::domain::content::CacheMetadata;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::{HeaderMap, HeaderName, HeaderValue, header},
    response::{IntoResponse, Response},
};
use headers::{CacheControl, HeaderMapExt};
use std::time::Duration;

static CACHE_TAGS_HEADER: HeaderName = HeaderName::from_static("x-cache-tags");
static CACHE_CONTEXTS_HEADER: HeaderName = HeaderName::from_static("x-cache-contexts");

/// `GET /api/v1/article-list`
///
/// Always `200 OK`: lookup failures have already been degraded to empty or
/// absent values by the query service, so this handler has no error path.
pub async fn list_articles(Extension(state): Extension<HttpState>) -> Response {
    let listing = state.services.article_queries.list_articles().await;

    let mut response = Json(&listing.records).into_response();
    apply_cache_headers(response.headers_mut(), &listing.cache);
    response
}

/// Encode the fingerprint onto the response: `Cache-Control: public,
/// max-age=…` when bounded, invalidation tags and vary-by contexts as
/// space-separated extension headers.
fn apply_cache_headers(headers: &mut HeaderMap, cache: &CacheMetadata) {
    if let Some(secs) = cache.max_age() {
        headers.typed_insert(
            CacheControl::new()
                .with_public()
                .with_max_age(Duration::from_secs(secs)),
        );
    } else {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("public"));
    }

    let tags = cache.tags().collect::<Vec<_>>().join(" ");
    if let Ok(value) = HeaderValue::from_str(&tags) {
        headers.insert(&CACHE_TAGS_HEADER, value);
    }

    let contexts = cache.contexts().collect::<Vec<_>>().join(" ");
    if !contexts.is_empty()
        && let Ok(value) = HeaderValue::from_str(&contexts)
    {
        headers.insert(&CACHE_CONTEXTS_HEADER, value);
    }
}
