// src/application/queries/articles/list.rs
use super::ArticleListQueryService;
use crate::application::dto::ArticleRecordDto;
use crate::application::ports::images::ImageStyle;
use crate::domain::article::{ARTICLE_KIND, Article};
use crate::domain::content::{CacheMetadata, ContentItem, FileEntity, TermEntity};

/// Image style applied to every listed article.
pub const ARTICLE_IMAGE_STYLE: &str = "article";

/// The listing body together with the cache fingerprint accumulated from
/// every entity touched while assembling it.
#[derive(Debug, Clone)]
pub struct ArticleListing {
    pub records: Vec<ArticleRecordDto>,
    pub cache: CacheMetadata,
}

impl ArticleListQueryService {
    /// Build the full listing in a single pass.
    ///
    /// Never fails: store and registry errors are logged and degrade to an
    /// empty list or an absent style, missing references read as nulls.
    pub async fn list_articles(&self) -> ArticleListing {
        let mut cache = self.base_cache.clone();

        let style = self.resolve_style(ARTICLE_IMAGE_STYLE).await;
        let items = self.load_article_items().await;

        let mut records = Vec::with_capacity(items.len());
        for item in items {
            records.push(self.project(item, style.as_ref(), &mut cache).await);
        }

        // The style participates in the fingerprint whether or not any
        // article ended up using it.
        if let Some(style) = &style {
            cache.merge(style.cache());
        }

        ArticleListing { records, cache }
    }

    async fn project(
        &self,
        item: ContentItem,
        style: Option<&ImageStyle>,
        cache: &mut CacheMetadata,
    ) -> ArticleRecordDto {
        let article = Article::new(item);
        let tag = self.resolve_tag(&article).await;
        let image = self.resolve_image(&article).await;

        cache.merge(article.item().cache());
        if let Some(tag) = &tag {
            cache.merge(tag.cache());
        }
        if let Some(image) = &image {
            cache.merge(image.cache());
        }

        let styled_image = match (&image, style) {
            (Some(image), Some(style)) => Some(
                self.file_urls
                    .transform_relative(&style.build_url(image.uri())),
            ),
            _ => None,
        };

        ArticleRecordDto {
            id: article.id(),
            path: self.routes.canonical_url(article.item()),
            title: article.title().to_owned(),
            body: article.description().map(str::to_owned),
            image: styled_image,
            tag: tag.map(|term| term.label().to_owned()),
        }
    }

    async fn resolve_style(&self, name: &str) -> Option<ImageStyle> {
        match self.styles.resolve(name).await {
            Ok(style) => style,
            Err(err) => {
                tracing::error!(error = %err, style = name, "image style lookup failed");
                None
            }
        }
    }

    async fn load_article_items(&self) -> Vec<ContentItem> {
        match self.store.load_by_type(ARTICLE_KIND).await {
            Ok(items) => items,
            Err(err) => {
                tracing::error!(error = %err, kind = ARTICLE_KIND, "content lookup failed");
                Vec::new()
            }
        }
    }

    async fn resolve_tag(&self, article: &Article) -> Option<TermEntity> {
        let id = article.tag_ref()?;
        match self.store.load_term(id).await {
            Ok(term) => term,
            Err(err) => {
                tracing::error!(error = %err, term = %id, "tag lookup failed");
                None
            }
        }
    }

    async fn resolve_image(&self, article: &Article) -> Option<FileEntity> {
        let id = article.image_ref()?;
        match self.store.load_file(id).await {
            Ok(file) => file,
            Err(err) => {
                tracing::error!(error = %err, file = %id, "image lookup failed");
                None
            }
        }
    }
}
