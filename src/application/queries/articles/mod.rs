pub mod list;
pub mod service;

pub use list::{ARTICLE_IMAGE_STYLE, ArticleListing};
pub use service::ArticleListQueryService;
