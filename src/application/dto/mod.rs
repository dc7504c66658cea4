pub mod articles;

pub use articles::ArticleRecordDto;
