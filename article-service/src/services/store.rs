use crate::models::Article;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

/// Persistence operations behind the article handlers.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Every article, ordered by identifier.
    async fn list(&self) -> Result<Vec<Article>, AppError>;

    /// Store `article` under a freshly generated identifier and return it.
    async fn insert(&self, article: Article) -> Result<ObjectId, AppError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Article>, AppError>;

    /// First article whose title is exactly `title`.
    async fn find_by_title(&self, title: &str) -> Result<Option<Article>, AppError>;

    async fn health_check(&self) -> Result<(), AppError>;
}
