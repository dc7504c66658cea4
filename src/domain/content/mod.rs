pub mod cache;
pub mod entities;
pub mod item;
pub mod repository;

pub use cache::CacheMetadata;
pub use entities::{FileEntity, FileId, TermEntity, TermId};
pub use item::ContentItem;
pub use repository::ContentStore;
