//! Integration tests driving the router in-process with mock providers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use recipe_assistant::AppState;
use recipe_assistant::api::routes::create_router;
use recipe_assistant::config::Config;
use recipe_assistant::providers::mock::{MockImageProvider, MockTextProvider};

fn test_state(completions: Arc<MockTextProvider>, images: Arc<MockImageProvider>) -> AppState {
    AppState {
        config: Arc::new(Config {
            server_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            openai_api_key: "test-api-key".to_string(),
        }),
        completions,
        images,
    }
}

async fn post_recipe(state: AppState, body: Value) -> (StatusCode, Value) {
    let app = create_router(state);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/recipe")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn returns_combined_recipe_response() {
    let completions = Arc::new(MockTextProvider::new("### Chocolate Chip Cookies\n\nMix and bake."));
    let images = Arc::new(MockImageProvider::new("https://images.example.com/cookies.png"));
    let state = test_state(completions.clone(), images.clone());

    let (status, body) = post_recipe(
        state,
        json!({
            "query": "chocolate chip cookies",
            "dietPreference": "vegetarian",
            "cuisineType": "italian"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recipe"], "### Chocolate Chip Cookies\n\nMix and bake.");
    assert_eq!(body["imageUrl"], "https://images.example.com/cookies.png");

    let resources = body["learningResources"].as_array().unwrap();
    assert_eq!(resources.len(), 2);
    assert_eq!(resources[0]["title"], "Master the Art of chocolate chip cookies");
    assert_eq!(
        resources[0]["url"],
        "https://cooking-school.example.com/learn/chocolate-chip-cookies"
    );
    assert_eq!(resources[0]["type"], "video");
    assert_eq!(
        resources[1]["title"],
        "Tips and Tricks for Perfect chocolate chip cookies"
    );
    assert_eq!(
        resources[1]["url"],
        "https://recipes.example.com/tips/chocolate-chip-cookies"
    );
    assert_eq!(resources[1]["type"], "article");

    assert_eq!(completions.calls(), 1);
    assert_eq!(images.calls(), 1);
}

#[tokio::test]
async fn empty_query_is_rejected_before_any_provider_call() {
    let completions = Arc::new(MockTextProvider::new("unused"));
    let images = Arc::new(MockImageProvider::new("unused"));
    let state = test_state(completions.clone(), images.clone());

    let (status, body) = post_recipe(state, json!({ "query": "" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Recipe query is required");
    assert_eq!(completions.calls(), 0);
    assert_eq!(images.calls(), 0);
}

#[tokio::test]
async fn whitespace_only_query_is_rejected() {
    let completions = Arc::new(MockTextProvider::new("unused"));
    let images = Arc::new(MockImageProvider::new("unused"));
    let state = test_state(completions.clone(), images.clone());

    let (status, body) = post_recipe(state, json!({ "query": "   " })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Recipe query is required");
    assert_eq!(completions.calls(), 0);
    assert_eq!(images.calls(), 0);
}

#[tokio::test]
async fn missing_query_field_is_rejected() {
    let completions = Arc::new(MockTextProvider::new("unused"));
    let images = Arc::new(MockImageProvider::new("unused"));
    let state = test_state(completions.clone(), images.clone());

    let (status, body) = post_recipe(state, json!({ "dietPreference": "vegan" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Recipe query is required");
    assert_eq!(completions.calls(), 0);
}

#[tokio::test]
async fn text_generation_failure_fails_the_whole_request() {
    let completions = Arc::new(MockTextProvider::failing("completion backend unavailable"));
    let images = Arc::new(MockImageProvider::new("https://images.example.com/unused.png"));
    let state = test_state(completions.clone(), images.clone());

    let (status, body) = post_recipe(state, json!({ "query": "pad thai" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "completion backend unavailable");
    assert!(body.get("imageUrl").is_none());
    assert!(body.get("recipe").is_none());
    assert_eq!(images.calls(), 0);
}

#[tokio::test]
async fn image_generation_failure_fails_the_whole_request() {
    let completions = Arc::new(MockTextProvider::new("### Pad Thai"));
    let images = Arc::new(MockImageProvider::failing("image backend unavailable"));
    let state = test_state(completions.clone(), images.clone());

    let (status, body) = post_recipe(state, json!({ "query": "pad thai" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "image backend unavailable");
    assert!(body.get("recipe").is_none());
    assert_eq!(completions.calls(), 1);
}

#[tokio::test]
async fn index_serves_html_shell() {
    let completions = Arc::new(MockTextProvider::new("unused"));
    let images = Arc::new(MockImageProvider::new("unused"));
    let app = create_router(test_state(completions, images));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let page = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(page.contains("AI Recipe Assistant"));
}
