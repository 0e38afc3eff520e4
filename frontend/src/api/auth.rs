use common::model::user::User;
use common::requests::{AuthResponse, LoginRequest, ProfileUpdate, RegisterRequest};

use super::client::{get, send_json, ApiResult, Verb};

pub async fn login(request: &LoginRequest) -> ApiResult<AuthResponse> {
    send_json(Verb::Post, "/users/login", request).await
}

pub async fn register(request: &RegisterRequest) -> ApiResult<User> {
    send_json(Verb::Post, "/users/register", request).await
}

pub async fn profile() -> ApiResult<User> {
    get("/users/profile").await
}

pub async fn update_profile(update: &ProfileUpdate) -> ApiResult<User> {
    send_json(Verb::Put, "/users/profile", update).await
}
