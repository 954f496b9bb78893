//! Exercises the MongoDB-backed store against a live server.
//!
//! Run with `cargo test -- --ignored` once MongoDB listens on localhost:27017.

use article_service::models::Article;
use article_service::services::{ArticleStore, MongoDb};
use mongodb::bson::{doc, DateTime};
use uuid::Uuid;

const MONGODB_URI: &str = "mongodb://localhost:27017";

async fn connect() -> (MongoDb, String) {
    let db_name = format!("article_test_{}", Uuid::new_v4().simple());
    let db = MongoDb::connect(MONGODB_URI, &db_name, "articles")
        .await
        .expect("Failed to connect to MongoDB");
    (db, db_name)
}

async fn cleanup(db: &MongoDb, db_name: &str) {
    let _ = db.client().database(db_name).drop(None).await;
}

#[tokio::test]
#[ignore = "Requires MongoDB at localhost:27017"]
async fn insert_then_find_by_id_round_trips() {
    let (db, db_name) = connect().await;

    let article = Article {
        id: None,
        title: "Pinning".to_string(),
        subtitle: "Self-referential futures".to_string(),
        content: "Pin<&mut Self>".to_string(),
        creation: Some(DateTime::from_millis(1_714_550_400_000)),
    };

    let id = db.insert(article.clone()).await.unwrap();
    let found = db.find_by_id(id).await.unwrap().expect("article missing");

    assert_eq!(found.id, Some(id));
    assert_eq!(found.title, article.title);
    assert_eq!(found.subtitle, article.subtitle);
    assert_eq!(found.content, article.content);
    assert_eq!(found.creation, article.creation);

    cleanup(&db, &db_name).await;
}

#[tokio::test]
#[ignore = "Requires MongoDB at localhost:27017"]
async fn empty_fields_are_not_stored() {
    let (db, db_name) = connect().await;

    let id = db
        .insert(Article {
            title: "Sparse".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let raw = db
        .database()
        .collection::<mongodb::bson::Document>("articles")
        .find_one(doc! { "_id": id }, None)
        .await
        .unwrap()
        .unwrap();

    assert!(raw.contains_key("title"));
    assert!(!raw.contains_key("subtitle"));
    assert!(!raw.contains_key("content"));
    assert!(!raw.contains_key("creation"));

    cleanup(&db, &db_name).await;
}

#[tokio::test]
#[ignore = "Requires MongoDB at localhost:27017"]
async fn list_and_search_by_title() {
    let (db, db_name) = connect().await;

    assert!(db.list().await.unwrap().is_empty());

    for title in ["Macros", "Generics"] {
        db.insert(Article {
            title: title.to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    }

    let titles: Vec<String> = db.list().await.unwrap().into_iter().map(|a| a.title).collect();
    assert_eq!(titles, ["Macros", "Generics"]);

    let found = db.find_by_title("Generics").await.unwrap();
    assert_eq!(found.map(|a| a.title).as_deref(), Some("Generics"));
    assert!(db.find_by_title("generics").await.unwrap().is_none());

    cleanup(&db, &db_name).await;
}

#[tokio::test]
#[ignore = "Requires MongoDB at localhost:27017"]
async fn undecodable_document_fails_the_listing_only() {
    let (db, db_name) = connect().await;

    db.database()
        .collection::<mongodb::bson::Document>("articles")
        .insert_one(doc! { "title": 17 }, None)
        .await
        .unwrap();

    assert!(db.list().await.is_err());
    // The store is still usable afterwards.
    assert!(db.health_check().await.is_ok());

    cleanup(&db, &db_name).await;
}

#[tokio::test]
async fn unreachable_server_fails_to_connect() {
    let result = MongoDb::connect(
        "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200",
        "unused",
        "articles",
    )
    .await;

    assert!(result.is_err());
}
