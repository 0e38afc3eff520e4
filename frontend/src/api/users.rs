use common::model::user::User;
use common::requests::{Ignored, SetActiveRequest, UserUpdate};

use super::client::{get, send_empty, send_json, ApiResult, Verb};

pub async fn list() -> ApiResult<Vec<User>> {
    get("/users").await
}

pub async fn find(id: &str) -> ApiResult<User> {
    get(&format!("/users/{id}")).await
}

pub async fn update(id: &str, update: &UserUpdate) -> ApiResult<User> {
    send_json(Verb::Put, &format!("/users/{id}"), update).await
}

pub async fn delete(id: &str) -> ApiResult<Ignored> {
    send_empty(Verb::Delete, &format!("/users/{id}")).await
}

pub async fn set_active(id: &str, is_active: bool) -> ApiResult<Ignored> {
    send_json(Verb::Put, &format!("/users/{id}/active"), &SetActiveRequest { is_active }).await
}
