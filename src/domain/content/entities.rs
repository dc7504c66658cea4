// src/domain/content/entities.rs
use crate::domain::content::cache::CacheMetadata;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub i64);

impl From<FileId> for i64 {
    fn from(value: FileId) -> Self {
        value.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TermId(pub i64);

impl From<TermId> for i64 {
    fn from(value: TermId) -> Self {
        value.0
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A stored file referenced (not owned) by content items.
///
/// The URI uses the storage scheme of the hosting platform, e.g.
/// `public://photos/cover.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntity {
    id: FileId,
    uri: String,
    cache: CacheMetadata,
}

impl FileEntity {
    pub fn new(id: FileId, uri: impl Into<String>) -> Self {
        Self {
            id,
            uri: uri.into(),
            cache: CacheMetadata::new().with_tag(format!("file:{id}")),
        }
    }

    pub fn with_max_age(mut self, secs: u64) -> Self {
        self.cache = self.cache.with_max_age(secs);
        self
    }

    pub const fn id(&self) -> FileId {
        self.id
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub const fn cache(&self) -> &CacheMetadata {
        &self.cache
    }
}

/// A taxonomy term used as an article tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermEntity {
    id: TermId,
    label: String,
    cache: CacheMetadata,
}

impl TermEntity {
    pub fn new(id: TermId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            cache: CacheMetadata::new().with_tag(format!("term:{id}")),
        }
    }

    pub fn with_max_age(mut self, secs: u64) -> Self {
        self.cache = self.cache.with_max_age(secs);
        self
    }

    pub const fn id(&self) -> TermId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub const fn cache(&self) -> &CacheMetadata {
        &self.cache
    }
}
