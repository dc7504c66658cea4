// src/infrastructure/store/seed.rs
use crate::domain::article::ARTICLE_KIND;
use crate::domain::content::{ContentItem, FileEntity, FileId, TermEntity, TermId};
use crate::infrastructure::store::memory::InMemoryContentStore;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    articles: Vec<SeedArticle>,
    #[serde(default)]
    files: Vec<SeedStoredFile>,
    #[serde(default)]
    terms: Vec<SeedTerm>,
}

#[derive(Debug, Deserialize)]
struct SeedArticle {
    id: i64,
    title: String,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    image: Option<i64>,
    #[serde(default)]
    tag: Option<i64>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    max_age: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct SeedStoredFile {
    id: i64,
    uri: String,
    #[serde(default)]
    max_age: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct SeedTerm {
    id: i64,
    label: String,
    #[serde(default)]
    max_age: Option<u64>,
}

/// Populate the store from a JSON fixture, used when `CONTENT_SEED` points
/// at a file.
pub fn load_into(store: &InMemoryContentStore, path: &Path) -> Result<(), SeedError> {
    let raw = std::fs::read_to_string(path)?;
    let seed: SeedFile = serde_json::from_str(&raw)?;

    for file in seed.files {
        let mut entity = FileEntity::new(FileId(file.id), file.uri);
        if let Some(secs) = file.max_age {
            entity = entity.with_max_age(secs);
        }
        store.insert_file(entity);
    }

    for term in seed.terms {
        let mut entity = TermEntity::new(TermId(term.id), term.label);
        if let Some(secs) = term.max_age {
            entity = entity.with_max_age(secs);
        }
        store.insert_term(entity);
    }

    for article in seed.articles {
        let mut item = ContentItem::new(article.id, ARTICLE_KIND, article.title);
        if let Some(body) = article.body {
            item = item.with_text_field("body", body);
        }
        if let Some(image) = article.image {
            item = item.with_reference_field("field_image", image);
        }
        if let Some(tag) = article.tag {
            item = item.with_reference_field("field_tags", tag);
        }
        if let Some(path) = article.path {
            item = item.with_route_path(path);
        }
        if let Some(secs) = article.max_age {
            item = item.with_max_age(secs);
        }
        store.insert_item(item);
    }

    Ok(())
}
