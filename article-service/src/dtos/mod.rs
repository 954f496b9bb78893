pub mod articles;

pub use articles::{ArticleResponse, CreateArticleRequest, InsertArticleResponse, SearchParams};
