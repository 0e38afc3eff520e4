use common::model::product::Product;
use common::requests::{Ignored, ProductPayload, ProductQuery};

use super::client::{get, get_with, send_empty, send_json, ApiResult, Verb};

pub async fn list(query: &ProductQuery) -> ApiResult<Vec<Product>> {
    get_with("/products", &query.to_pairs()).await
}

pub async fn find(id: &str) -> ApiResult<Product> {
    get(&format!("/products/{id}")).await
}

pub async fn categories() -> ApiResult<Vec<String>> {
    get("/products/categories").await
}

pub async fn create(payload: &ProductPayload) -> ApiResult<Product> {
    send_json(Verb::Post, "/products", payload).await
}

pub async fn update(id: &str, payload: &ProductPayload) -> ApiResult<Product> {
    send_json(Verb::Put, &format!("/products/{id}"), payload).await
}

pub async fn delete(id: &str) -> ApiResult<Ignored> {
    send_empty(Verb::Delete, &format!("/products/{id}")).await
}

/// Asks the backend to reprice every product from the current metal quotes.
pub async fn recalculate_metals() -> ApiResult<Ignored> {
    send_empty(Verb::Post, "/products/recalculate-metals").await
}
