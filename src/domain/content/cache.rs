// src/domain/content/cache.rs
use std::collections::BTreeSet;

/// Cache-validity metadata accumulated across every entity touched while
/// building a response. Tags and contexts are unioned on merge; max-age keeps
/// the most restrictive (minimum) value, with `None` meaning unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheMetadata {
    tags: BTreeSet<String>,
    contexts: BTreeSet<String>,
    max_age: Option<u64>,
}

impl CacheMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.contexts.insert(context.into());
        self
    }

    pub fn with_max_age(mut self, secs: u64) -> Self {
        self.max_age = Some(secs);
        self
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.insert(tag.into());
    }

    /// Union tags and contexts; keep the minimum bounded max-age.
    pub fn merge(&mut self, other: &Self) {
        self.tags.extend(other.tags.iter().cloned());
        self.contexts.extend(other.contexts.iter().cloned());
        self.max_age = match (self.max_age, other.max_age) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (bounded @ Some(_), None) | (None, bounded @ Some(_)) => bounded,
            (None, None) => None,
        };
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.contexts.iter().map(String::as_str)
    }

    pub const fn max_age(&self) -> Option<u64> {
        self.max_age
    }
}
