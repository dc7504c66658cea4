// src/infrastructure/routing.rs
use crate::application::ports::routing::RouteResolver;
use crate::domain::content::ContentItem;

/// Builds fully qualified canonical URLs from the configured site base URL
/// and an item's route path.
pub struct SiteRouteResolver {
    base_url: String,
}

impl SiteRouteResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

impl RouteResolver for SiteRouteResolver {
    fn canonical_url(&self, item: &ContentItem) -> Option<String> {
        let path = item.route_path()?;
        Some(format!("{}/{}", self.base_url, path.trim_start_matches('/')))
    }
}
