// src/application/ports/routing.rs
use crate::domain::content::item::ContentItem;

/// Canonical URL generation for content items.
///
/// Fails soft: an item without a routable identity (e.g. never persisted)
/// yields `None` instead of an error, and must not affect sibling items.
pub trait RouteResolver: Send + Sync {
    fn canonical_url(&self, item: &ContentItem) -> Option<String>;
}
