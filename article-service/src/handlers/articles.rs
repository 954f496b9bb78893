use crate::dtos::{ArticleResponse, CreateArticleRequest, InsertArticleResponse, SearchParams};
use crate::models::Article;
use crate::services::metrics::ARTICLES_CREATED_TOTAL;
use crate::startup::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

pub async fn list_articles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ArticleResponse>>, AppError> {
    let articles = state.store.list().await?;

    tracing::debug!(count = articles.len(), "Listed articles");

    Ok(Json(articles.into_iter().map(ArticleResponse::from).collect()))
}

pub async fn create_article(
    State(state): State<AppState>,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> Result<Json<InsertArticleResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Invalid article body: {}", e.body_text()))
    })?;

    let id = state.store.insert(Article::from(payload)).await?;

    metrics::counter!(ARTICLES_CREATED_TOTAL).increment(1);
    tracing::info!(article_id = %id, "Article created");

    Ok(Json(InsertArticleResponse {
        inserted_id: id.to_hex(),
    }))
}

pub async fn get_article(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<ArticleResponse>, AppError> {
    let Path(id) = id.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Invalid article path: {}", e.body_text()))
    })?;
    let article_id = parse_article_id(&id)?;

    let article = state
        .store
        .find_by_id(article_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Article {} not found", id)))?;

    Ok(Json(ArticleResponse::from(article)))
}

pub async fn search_articles(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<ArticleResponse>, AppError> {
    let Query(params) = params.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Invalid search query: {}", e.body_text()))
    })?;
    let title = params
        .q
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Missing query parameter 'q'")))?;

    tracing::debug!(title = %title, "Searching article by title");

    let article = state
        .store
        .find_by_title(&title)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("No article titled '{}'", title)))?;

    Ok(Json(ArticleResponse::from(article)))
}

pub async fn route_not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("No such route"))
}

fn parse_article_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw)
        .map_err(|_| AppError::BadRequest(anyhow::anyhow!("Invalid article id '{}'", raw)))
}
