// src/domain/content/repository.rs
use crate::domain::content::entities::{FileEntity, FileId, TermEntity, TermId};
use crate::domain::content::item::ContentItem;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Read side of the content backend.
///
/// `load_by_type` returns items in storage-default order. Dangling references
/// resolve to `Ok(None)`; only backend failures surface as `Err`.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn load_by_type(&self, kind: &str) -> DomainResult<Vec<ContentItem>>;
    async fn load_file(&self, id: FileId) -> DomainResult<Option<FileEntity>>;
    async fn load_term(&self, id: TermId) -> DomainResult<Option<TermEntity>>;
}
