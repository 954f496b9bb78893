use crate::models::Article;
use crate::services::ArticleStore;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use tokio::sync::RwLock;

/// Process-local article store. Backs the HTTP tests; `unavailable()`
/// builds one whose every call fails like a lost database connection.
#[derive(Default)]
pub struct InMemoryArticleStore {
    articles: RwLock<Vec<Article>>,
    unavailable: bool,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            articles: RwLock::default(),
            unavailable: true,
        }
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable {
            return Err(AppError::DatabaseError(anyhow::anyhow!(
                "article store is unavailable"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn list(&self) -> Result<Vec<Article>, AppError> {
        self.check_available()?;
        let mut articles = self.articles.read().await.clone();
        articles.sort_by_key(|a| a.id);
        Ok(articles)
    }

    async fn insert(&self, mut article: Article) -> Result<ObjectId, AppError> {
        self.check_available()?;
        let id = ObjectId::new();
        article.id = Some(id);
        self.articles.write().await.push(article);
        Ok(id)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Article>, AppError> {
        self.check_available()?;
        Ok(self
            .articles
            .read()
            .await
            .iter()
            .find(|a| a.id == Some(id))
            .cloned())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Article>, AppError> {
        self.check_available()?;
        // Empty titles are never stored, so they never match.
        if title.is_empty() {
            return Ok(None);
        }
        Ok(self
            .articles
            .read()
            .await
            .iter()
            .find(|a| a.title == title)
            .cloned())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.check_available()
    }
}
