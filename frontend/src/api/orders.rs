use common::model::order::{Order, OrderStatus};
use common::requests::{Ignored, NewOrder, StatusUpdateRequest};

use super::client::{get, get_with, send_empty, send_json, ApiResult, Verb};

pub async fn list() -> ApiResult<Vec<Order>> {
    get("/orders").await
}

pub async fn trash() -> ApiResult<Vec<Order>> {
    get_with("/orders", &[("trash", "true".to_string())]).await
}

pub async fn find(id: &str) -> ApiResult<Order> {
    get(&format!("/orders/{id}")).await
}

pub async fn mine() -> ApiResult<Vec<Order>> {
    get("/orders/my-orders").await
}

pub async fn create(order: &NewOrder) -> ApiResult<Order> {
    send_json(Verb::Post, "/orders", order).await
}

pub async fn update_status(id: &str, status: OrderStatus, admin_note: &str) -> ApiResult<Order> {
    let body = StatusUpdateRequest { status, admin_note: admin_note.to_string() };
    send_json(Verb::Put, &format!("/orders/{id}/status"), &body).await
}

pub async fn move_to_trash(id: &str) -> ApiResult<Ignored> {
    send_empty(Verb::Put, &format!("/orders/{id}/trash")).await
}

pub async fn restore(id: &str) -> ApiResult<Ignored> {
    send_empty(Verb::Put, &format!("/orders/{id}/restore")).await
}

pub async fn hard_delete(id: &str) -> ApiResult<Ignored> {
    send_empty(Verb::Delete, &format!("/orders/{id}")).await
}
