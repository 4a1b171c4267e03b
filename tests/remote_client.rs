//! Integration tests for the remote store client against a mock HTTP server.
//!
//! Each test starts its own wiremock server for isolation and verifies both
//! the request shape (method, path, body) and the response decoding.

use lifedash::model::{CategoryName, FoodItem};
use lifedash::remote::{decode_items, RemoteClient, RemoteError};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> RemoteClient {
    RemoteClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

fn food(name: &str, amount: u32) -> FoodItem {
    FoodItem {
        name: name.to_string(),
        price: 1.0,
        amount,
        renew_threshold: 0,
        cart_qty: 9, // transient; must not appear on the wire
    }
}

// ============================================================================
// Fetch
// ============================================================================

#[tokio::test]
async fn fetch_categories_decodes_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories/user1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "cat-1",
                "user_id": "user1",
                "name": "Food",
                "content": {"items": [{"name": "Rice", "price": 4.5, "amount": 2, "renewThreshold": 0}]}
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let categories = client.fetch_categories("user1").await.unwrap();

    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].id, "cat-1");
    assert_eq!(categories[0].owner_token, "user1");
    let items: Vec<FoodItem> = decode_items(&categories[0]);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Rice");
}

#[tokio::test]
async fn fetch_categories_maps_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.fetch_categories("user1").await.unwrap_err();
    assert!(matches!(err, RemoteError::HttpStatus(500)));
}

// ============================================================================
// Upsert
// ============================================================================

#[tokio::test]
async fn upsert_without_id_posts_create() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/categories"))
        .and(body_partial_json(json!({
            "user_id": "user1",
            "name": "Food",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .upsert_category("user1", CategoryName::Food, None, &[food("Rice", 2)])
        .await
        .unwrap();
}

#[tokio::test]
async fn upsert_with_id_puts_update() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/categories/cat-7"))
        .and(body_partial_json(json!({
            "id": "cat-7",
            "name": "Subscriptions",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client
        .upsert_category(
            "user1",
            CategoryName::Subscriptions,
            Some("cat-7"),
            &Vec::<FoodItem>::new(),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn upsert_body_wraps_items_and_omits_cart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/categories"))
        .and(body_partial_json(json!({
            "content": {"items": [{"name": "Rice", "price": 1.0, "amount": 2, "renewThreshold": 0}]}
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    // cart_qty = 9 on the item must not be serialized.
    client
        .upsert_category("user1", CategoryName::Food, None, &[food("Rice", 2)])
        .await
        .unwrap();
}

#[tokio::test]
async fn upsert_maps_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .upsert_category("user1", CategoryName::Food, None, &[food("Rice", 2)])
        .await
        .unwrap_err();
    assert!(matches!(err, RemoteError::HttpStatus(422)));
}

// ============================================================================
// Recipe generation
// ============================================================================

#[tokio::test]
async fn generate_recipe_sends_ingredients_and_returns_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/recipes/generate"))
        .and(body_partial_json(json!({"ingredients": ["Rice", "Eggs"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"recipe": "Fried rice"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let recipe = client
        .generate_recipe(&["Rice".to_string(), "Eggs".to_string()])
        .await
        .unwrap();
    assert_eq!(recipe, "Fried rice");
}

#[tokio::test]
async fn generate_recipe_missing_field_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"note": "no recipe"})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.generate_recipe(&[]).await.unwrap_err();
    assert!(matches!(err, RemoteError::MissingField("recipe")));
}

// ============================================================================
// Academics scrape
// ============================================================================

#[tokio::test]
async fn scrape_academics_passes_token_and_decodes_items() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/scrapers/canvas"))
        .and(query_param("user_id", "user1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"name": "Problem set 4", "dueDate": "Fri 23:59"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let items = client.scrape_academics("user1").await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Problem set 4");
    assert_eq!(items[0].due_date, "Fri 23:59");
}

#[tokio::test]
async fn scrape_academics_maps_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.scrape_academics("user1").await.unwrap_err();
    assert!(matches!(err, RemoteError::HttpStatus(503)));
}
