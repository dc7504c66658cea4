// src/domain/article.rs
use crate::domain::content::entities::{FileId, TermId};
use crate::domain::content::item::ContentItem;

/// Content kind handled by this service.
pub const ARTICLE_KIND: &str = "article";

const BODY_FIELD: &str = "body";
const IMAGE_FIELD: &str = "field_image";
const TAG_FIELD: &str = "field_tags";

/// Typed view over an article-shaped content item.
///
/// Composition over a generic [`ContentItem`] rather than an entity subclass:
/// the view model owns the field-name knowledge so call sites never re-derive
/// it. Getters are pure reads; setters write the backing field and return the
/// view for chaining (unused by the listing read path, kept for the write
/// side of the abstraction).
#[derive(Debug, Clone)]
pub struct Article {
    item: ContentItem,
}

impl Article {
    pub const fn new(item: ContentItem) -> Self {
        Self { item }
    }

    pub const fn id(&self) -> i64 {
        self.item.id()
    }

    pub fn title(&self) -> &str {
        self.item.title()
    }

    /// Body text, absent when the field is unset.
    pub fn description(&self) -> Option<&str> {
        self.item.text_field(BODY_FIELD)
    }

    pub fn set_description(&mut self, value: impl Into<String>) -> &mut Self {
        self.item.set_text_field(BODY_FIELD, value);
        self
    }

    /// Reference to the image file, absent when the field is empty.
    pub fn image_ref(&self) -> Option<FileId> {
        self.item.reference_field(IMAGE_FIELD).map(FileId)
    }

    pub fn set_image(&mut self, id: FileId) -> &mut Self {
        self.item.set_reference_field(IMAGE_FIELD, id.into());
        self
    }

    /// Reference to the tag term, absent when the field is empty.
    pub fn tag_ref(&self) -> Option<TermId> {
        self.item.reference_field(TAG_FIELD).map(TermId)
    }

    pub fn set_tag(&mut self, id: TermId) -> &mut Self {
        self.item.set_reference_field(TAG_FIELD, id.into());
        self
    }

    /// Backing item, for cache-metadata merges and route resolution.
    pub const fn item(&self) -> &ContentItem {
        &self.item
    }
}
