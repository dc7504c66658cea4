// tests/support/mocks.rs
use article_feed::application::ports::images::{ImageStyle, ImageStyleRegistry};
use article_feed::domain::content::{
    ContentItem, ContentStore, FileEntity, FileId, TermEntity, TermId,
};
use article_feed::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

/// Content backend whose every lookup fails, as if the storage subsystem
/// were unreachable.
pub struct FailingContentStore;

#[async_trait]
impl ContentStore for FailingContentStore {
    async fn load_by_type(&self, _kind: &str) -> DomainResult<Vec<ContentItem>> {
        Err(DomainError::Lookup("storage backend unreachable".into()))
    }

    async fn load_file(&self, _id: FileId) -> DomainResult<Option<FileEntity>> {
        Err(DomainError::Lookup("storage backend unreachable".into()))
    }

    async fn load_term(&self, _id: TermId) -> DomainResult<Option<TermEntity>> {
        Err(DomainError::Lookup("storage backend unreachable".into()))
    }
}

/// Style registry whose lookups fail outright, distinct from a style that
/// merely does not exist.
pub struct FailingStyleRegistry;

#[async_trait]
impl ImageStyleRegistry for FailingStyleRegistry {
    async fn resolve(&self, _name: &str) -> DomainResult<Option<ImageStyle>> {
        Err(DomainError::Lookup("style registry unreachable".into()))
    }
}
