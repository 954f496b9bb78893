use crate::models::Article;
use crate::services::ArticleStore;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::{ClientOptions, FindOptions},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
    collection: String,
}

impl MongoDb {
    /// Build a client for `uri` and ping the server, so an unreachable
    /// deployment fails start-up instead of the first request.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");
        let mut client_options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::from(e)
        })?;
        client_options.app_name = Some("article-service".to_string());

        let client = MongoClient::with_options(client_options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);

        let mongo = Self {
            client,
            db,
            collection: collection.to_string(),
        };
        mongo.health_check().await?;

        tracing::info!(
            database = %database,
            collection = %collection,
            "Successfully connected to MongoDB"
        );
        Ok(mongo)
    }

    pub fn articles(&self) -> Collection<Article> {
        self.db.collection(&self.collection)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl ArticleStore for MongoDb {
    async fn list(&self) -> Result<Vec<Article>, AppError> {
        let find_options = FindOptions::builder().sort(doc! { "_id": 1 }).build();

        let mut cursor = self.articles().find(doc! {}, find_options).await?;

        let mut articles = Vec::new();
        // A document that fails to decode fails this request only.
        while let Some(article) = cursor.try_next().await.map_err(|e| {
            tracing::error!("Failed to read article from cursor: {}", e);
            AppError::from(e)
        })? {
            articles.push(article);
        }

        Ok(articles)
    }

    async fn insert(&self, article: Article) -> Result<ObjectId, AppError> {
        let result = self.articles().insert_one(article, None).await?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(anyhow::anyhow!(
                "Inserted id is not an ObjectId: {}",
                result.inserted_id
            ))
        })
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Article>, AppError> {
        Ok(self.articles().find_one(doc! { "_id": id }, None).await?)
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Article>, AppError> {
        Ok(self
            .articles()
            .find_one(doc! { "title": title }, None)
            .await?)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }
}
