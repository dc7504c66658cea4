// src/application/dto/articles.rs
use serde::{Deserialize, Serialize};

/// One element of the listing response. Absent values serialize as explicit
/// nulls; field order is part of the response shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecordDto {
    pub id: i64,
    pub path: Option<String>,
    pub title: String,
    pub body: Option<String>,
    pub image: Option<String>,
    pub tag: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_serialize_as_nulls() {
        let record = ArticleRecordDto {
            id: 1,
            path: None,
            title: "Hello".into(),
            body: Some("World".into()),
            image: None,
            tag: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"path":null,"title":"Hello","body":"World","image":null,"tag":null}"#
        );
    }
}
