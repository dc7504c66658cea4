// tests/listing_fingerprint.rs
use article_feed::domain::content::{ContentItem, FileEntity, FileId, TermEntity, TermId};
use article_feed::infrastructure::store::InMemoryContentStore;
use std::sync::Arc;

mod support;

/// The style's metadata joins the fingerprint even when no article uses it.
#[tokio::test]
async fn style_metadata_merges_without_any_articles() {
    let service = support::make_service(
        Arc::new(InMemoryContentStore::new()),
        support::default_styles(),
        support::base_cache(),
    );

    let listing = service.list_articles().await;

    assert!(listing.records.is_empty());
    let tags: Vec<&str> = listing.cache.tags().collect();
    assert_eq!(tags, vec!["content_list:article", "image_style:article"]);
}

/// With an unbounded base, the most restrictive entity max-age wins.
#[tokio::test]
async fn max_age_is_the_minimum_across_touched_entities() {
    let store = InMemoryContentStore::new();
    store.insert_file(FileEntity::new(FileId(3), "public://cover.png").with_max_age(300));
    store.insert_term(TermEntity::new(TermId(9), "News").with_max_age(45));
    store.insert_item(
        ContentItem::new(1, "article", "Hello")
            .with_reference_field("field_image", 3)
            .with_reference_field("field_tags", 9)
            .with_max_age(120),
    );

    let service = support::make_service(
        Arc::new(store),
        support::default_styles(),
        support::base_cache(),
    );

    let listing = service.list_articles().await;
    assert_eq!(listing.cache.max_age(), Some(45));
}

/// A failing style registry degrades to an absent style: records keep their
/// other fields and the fingerprint carries no style tag.
#[tokio::test]
async fn failing_style_registry_degrades_to_absent_style() {
    let store = InMemoryContentStore::new();
    store.insert_file(FileEntity::new(FileId(3), "public://cover.png"));
    store.insert_item(
        ContentItem::new(1, "article", "Hello").with_reference_field("field_image", 3),
    );

    let service = support::make_service(
        Arc::new(store),
        Arc::new(support::mocks::FailingStyleRegistry),
        support::base_cache(),
    );

    let listing = service.list_articles().await;

    assert_eq!(listing.records.len(), 1);
    assert_eq!(listing.records[0].image, None);
    assert_eq!(listing.records[0].title, "Hello");
    assert!(!listing.cache.tags().any(|t| t.starts_with("image_style:")));
    // The resolved image still joined the fingerprint.
    assert!(listing.cache.tags().any(|t| t == "file:3"));
}

/// Unreachable storage leaves the fingerprint at its base plus the style.
#[tokio::test]
async fn store_failure_keeps_the_base_fingerprint() {
    let service = support::make_service(
        Arc::new(support::mocks::FailingContentStore),
        support::default_styles(),
        support::base_cache().with_max_age(600),
    );

    let listing = service.list_articles().await;

    assert!(listing.records.is_empty());
    assert_eq!(listing.cache.max_age(), Some(600));
    let tags: Vec<&str> = listing.cache.tags().collect();
    assert_eq!(tags, vec!["content_list:article", "image_style:article"]);
}

/// Dangling references list as nulls without contributing cache metadata.
#[tokio::test]
async fn dangling_references_read_as_absent() {
    let store = InMemoryContentStore::new();
    store.insert_item(
        ContentItem::new(1, "article", "Hello")
            .with_reference_field("field_image", 404)
            .with_reference_field("field_tags", 404),
    );

    let service = support::make_service(
        Arc::new(store),
        support::default_styles(),
        support::base_cache(),
    );

    let listing = service.list_articles().await;

    assert_eq!(listing.records[0].image, None);
    assert_eq!(listing.records[0].tag, None);
    assert!(!listing.cache.tags().any(|t| t.starts_with("file:")));
    assert!(!listing.cache.tags().any(|t| t.starts_with("term:")));
}
