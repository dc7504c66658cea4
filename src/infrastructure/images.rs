// src/infrastructure/images.rs
use crate::application::ports::images::{FileUrlGenerator, ImageStyle, ImageStyleRegistry};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Style registry deriving styled URLs under `<base>/styles/<name>/`.
///
/// Styles are declared at construction; resolving an undeclared name yields
/// `Ok(None)`, mirroring a style that was deleted from the site.
pub struct PathImageStyleRegistry {
    base_url: String,
    known_styles: BTreeSet<String>,
}

impl PathImageStyleRegistry {
    pub fn new(base_url: impl Into<String>, styles: impl IntoIterator<Item = String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            known_styles: styles.into_iter().collect(),
        }
    }
}

#[async_trait]
impl ImageStyleRegistry for PathImageStyleRegistry {
    async fn resolve(&self, name: &str) -> DomainResult<Option<ImageStyle>> {
        if !self.known_styles.contains(name) {
            return Ok(None);
        }
        let prefix = format!("{}/styles/{name}", self.base_url);
        Ok(Some(ImageStyle::new(name, prefix)))
    }
}

/// Rewrites absolute URLs under the site base into site-root-relative paths.
/// URLs outside the site are returned unchanged.
pub struct SiteFileUrlGenerator {
    base_url: String,
}

impl SiteFileUrlGenerator {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

impl FileUrlGenerator for SiteFileUrlGenerator {
    fn transform_relative(&self, url: &str) -> String {
        url.strip_prefix(&self.base_url).map_or_else(
            || url.to_owned(),
            |rest| {
                if rest.starts_with('/') {
                    rest.to_owned()
                } else {
                    format!("/{rest}")
                }
            },
        )
    }
}
