// src/infrastructure/store/memory.rs
use crate::domain::content::{ContentItem, ContentStore, FileEntity, FileId, TermEntity, TermId};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

#[derive(Default)]
struct Inner {
    // Insertion order is the storage-default listing order.
    items: Vec<ContentItem>,
    files: BTreeMap<FileId, FileEntity>,
    terms: BTreeMap<TermId, TermEntity>,
}

/// In-process content backend used for local runs and tests. The persistent
/// storage engine is out of scope for this service.
#[derive(Default)]
pub struct InMemoryContentStore {
    inner: RwLock<Inner>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_item(&self, item: ContentItem) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .items
            .push(item);
    }

    pub fn insert_file(&self, file: FileEntity) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .files
            .insert(file.id(), file);
    }

    pub fn insert_term(&self, term: TermEntity) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .terms
            .insert(term.id(), term);
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn load_by_type(&self, kind: &str) -> DomainResult<Vec<ContentItem>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| DomainError::Lookup("content store lock poisoned".into()))?;
        Ok(inner
            .items
            .iter()
            .filter(|item| item.kind() == kind)
            .cloned()
            .collect())
    }

    async fn load_file(&self, id: FileId) -> DomainResult<Option<FileEntity>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| DomainError::Lookup("content store lock poisoned".into()))?;
        Ok(inner.files.get(&id).cloned())
    }

    async fn load_term(&self, id: TermId) -> DomainResult<Option<TermEntity>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| DomainError::Lookup("content store lock poisoned".into()))?;
        Ok(inner.terms.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_by_type_filters_and_preserves_insertion_order() {
        let store = InMemoryContentStore::new();
        store.insert_item(ContentItem::new(2, "article", "Second"));
        store.insert_item(ContentItem::new(5, "page", "About"));
        store.insert_item(ContentItem::new(1, "article", "First"));

        let items = store.load_by_type("article").await.unwrap();
        let ids: Vec<i64> = items.iter().map(ContentItem::id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn dangling_references_load_as_none() {
        let store = InMemoryContentStore::new();
        assert!(store.load_file(FileId(404)).await.unwrap().is_none());
        assert!(store.load_term(TermId(404)).await.unwrap().is_none());
    }
}
