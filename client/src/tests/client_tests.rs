use axum::{Json, Router, extract::Query, http::StatusCode, routing::get};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use trivia_common::models::{CategoryId, GameParams};

use crate::{Error, JServiceClient, TriviaSource, load_board};

#[test]
fn urls_follow_the_service_layout() {
    let client = JServiceClient::new("https://jservice.io").unwrap();

    assert_eq!(
        client.categories_url(100).unwrap().as_str(),
        "https://jservice.io/api/categories?count=100"
    );
    assert_eq!(
        client.category_url(CategoryId(42)).unwrap().as_str(),
        "https://jservice.io/api/category?id=42"
    );
}

#[test]
fn a_bad_base_url_is_rejected_up_front() {
    assert!(matches!(
        JServiceClient::new("not a url"),
        Err(Error::BaseUrl(_))
    ));
}

#[derive(Deserialize)]
struct CountParam {
    count: usize,
}

#[derive(Deserialize)]
struct IdParam {
    id: u64,
}

async fn categories(Query(param): Query<CountParam>) -> Json<Value> {
    let pool: Vec<Value> = (0..param.count.min(8) as u64)
        .map(|i| {
            json!({
                "id": i,
                "title": format!("category {i}"),
                "clues_count": 10
            })
        })
        .collect();
    Json(Value::Array(pool))
}

async fn category(Query(param): Query<IdParam>) -> Json<Value> {
    let clues: Vec<Value> = (0..4u64)
        .map(|j| {
            json!({
                "id": param.id * 10 + j,
                "question": format!("q{}-{j}", param.id),
                "answer": format!("a{}-{j}", param.id),
                "value": if j == 3 { Value::Null } else { json!((j + 1) * 100) },
                "airdate": "2014-02-11T12:00:00.000Z",
                "category_id": param.id
            })
        })
        .collect();
    Json(json!({
        "id": param.id,
        "title": format!("category {}", param.id),
        "clues_count": 4,
        "clues": clues
    }))
}

async fn spawn_service(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn loads_a_board_over_http() {
    let app = Router::new()
        .route("/api/categories", get(categories))
        .route("/api/category", get(category));
    let base = spawn_service(app).await;
    let client = JServiceClient::new(&base).unwrap();

    let params = GameParams {
        categories: 3,
        clues_per_category: 2,
        category_pool: 8,
    };
    let board = load_board(&client, &params).await.unwrap();

    assert_eq!(board.category_count(), 3);
    for category in &board.categories {
        assert!(category.title.starts_with("category "));
        assert_eq!(category.clues.len(), 2);
        for clue in &category.clues {
            // null values arrive as 0, everything else keeps its value
            assert!(clue.value == 0 || clue.value % 100 == 0);
        }
    }
}

#[tokio::test]
async fn http_errors_surface_as_transport_failures() {
    let app = Router::new().route(
        "/api/categories",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = spawn_service(app).await;
    let client = JServiceClient::new(&base).unwrap();

    let err = client.category_pool(5).await.unwrap_err();

    assert!(matches!(err, Error::Http(_)));
}
