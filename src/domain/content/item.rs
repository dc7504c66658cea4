// src/domain/content/item.rs
use crate::domain::content::cache::CacheMetadata;
use std::collections::BTreeMap;

/// A generic field-addressed content record as loaded from the store.
///
/// Fields are either scalar text or a reference to another entity by id.
/// Every item carries its own cache metadata, seeded with the per-item
/// invalidation tag `content:{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    id: i64,
    kind: String,
    title: String,
    text_fields: BTreeMap<String, String>,
    reference_fields: BTreeMap<String, i64>,
    route_path: Option<String>,
    cache: CacheMetadata,
}

impl ContentItem {
    pub fn new(id: i64, kind: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
            title: title.into(),
            text_fields: BTreeMap::new(),
            reference_fields: BTreeMap::new(),
            route_path: None,
            cache: CacheMetadata::new().with_tag(format!("content:{id}")),
        }
    }

    pub fn with_text_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.text_fields.insert(name.into(), value.into());
        self
    }

    pub fn with_reference_field(mut self, name: impl Into<String>, target: i64) -> Self {
        self.reference_fields.insert(name.into(), target);
        self
    }

    /// Attach the site-relative route path that makes this item routable.
    /// Items without one have no canonical URL.
    pub fn with_route_path(mut self, path: impl Into<String>) -> Self {
        self.route_path = Some(path.into());
        self
    }

    pub fn with_max_age(mut self, secs: u64) -> Self {
        self.cache = self.cache.with_max_age(secs);
        self
    }

    pub const fn id(&self) -> i64 {
        self.id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text_field(&self, name: &str) -> Option<&str> {
        self.text_fields.get(name).map(String::as_str)
    }

    pub fn set_text_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.text_fields.insert(name.into(), value.into());
    }

    pub fn reference_field(&self, name: &str) -> Option<i64> {
        self.reference_fields.get(name).copied()
    }

    pub fn set_reference_field(&mut self, name: impl Into<String>, target: i64) {
        self.reference_fields.insert(name.into(), target);
    }

    pub fn route_path(&self) -> Option<&str> {
        self.route_path.as_deref()
    }

    pub const fn cache(&self) -> &CacheMetadata {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_carries_its_invalidation_tag() {
        let item = ContentItem::new(7, "article", "Seven");
        let tags: Vec<&str> = item.cache().tags().collect();
        assert_eq!(tags, vec!["content:7"]);
        assert_eq!(item.cache().max_age(), None);
    }

    #[test]
    fn field_access_distinguishes_text_and_references() {
        let item = ContentItem::new(1, "article", "Hello")
            .with_text_field("body", "World")
            .with_reference_field("field_image", 3);

        assert_eq!(item.text_field("body"), Some("World"));
        assert_eq!(item.text_field("field_image"), None);
        assert_eq!(item.reference_field("field_image"), Some(3));
        assert_eq!(item.reference_field("body"), None);
    }
}
