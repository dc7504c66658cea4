// src/application/ports/images.rs
use crate::domain::content::cache::CacheMetadata;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// A named derivation rule mapping a file's storage URI to a styled URL.
///
/// Resolved once per request and reused for every article in the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageStyle {
    name: String,
    url_prefix: String,
    cache: CacheMetadata,
}

impl ImageStyle {
    pub fn new(name: impl Into<String>, url_prefix: impl Into<String>) -> Self {
        let name = name.into();
        let cache = CacheMetadata::new().with_tag(format!("image_style:{name}"));
        Self {
            name,
            url_prefix: url_prefix.into(),
            cache,
        }
    }

    pub fn with_max_age(mut self, secs: u64) -> Self {
        self.cache = self.cache.with_max_age(secs);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute URL of the styled derivative for `source_uri`.
    ///
    /// The storage scheme (`public://…`) is dropped; the remaining path is
    /// appended to the style's URL prefix.
    pub fn build_url(&self, source_uri: &str) -> String {
        let relative = source_uri
            .split_once("://")
            .map_or(source_uri, |(_, path)| path);
        format!(
            "{}/{}",
            self.url_prefix.trim_end_matches('/'),
            relative.trim_start_matches('/')
        )
    }

    pub const fn cache(&self) -> &CacheMetadata {
        &self.cache
    }
}

/// Lookup of image styles by name. `Ok(None)` means the style does not
/// exist; `Err` means the registry itself failed.
#[async_trait]
pub trait ImageStyleRegistry: Send + Sync {
    async fn resolve(&self, name: &str) -> DomainResult<Option<ImageStyle>>;
}

/// Conversion of absolute file URLs into site-root-relative paths.
pub trait FileUrlGenerator: Send + Sync {
    fn transform_relative(&self, url: &str) -> String;
}
