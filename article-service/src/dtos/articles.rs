use crate::models::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body accepted by `POST /articles`. Every field is optional; any `_id`
/// sent by the caller is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateArticleRequest {
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub creation: Option<DateTime<Utc>>,
}

impl From<CreateArticleRequest> for Article {
    fn from(req: CreateArticleRequest) -> Self {
        Self {
            id: None,
            title: req.title,
            subtitle: req.subtitle,
            content: req.content,
            creation: req.creation.map(mongodb::bson::DateTime::from_chrono),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ArticleResponse {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation: Option<DateTime<Utc>>,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.map(|id| id.to_hex()),
            title: article.title,
            subtitle: article.subtitle,
            content: article.content,
            creation: article.creation.map(|dt| dt.to_chrono()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InsertArticleResponse {
    pub inserted_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}
