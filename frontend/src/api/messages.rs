use common::model::message::Message;
use common::requests::{Ignored, UnreadCountResponse};

use super::client::{get, send_empty, ApiResult, Verb};

pub async fn list() -> ApiResult<Vec<Message>> {
    get("/messages").await
}

pub async fn unread_count() -> ApiResult<u64> {
    get::<UnreadCountResponse>("/messages/unread/count")
        .await
        .map(|response| response.unread_count)
}

pub async fn mark_read(id: &str) -> ApiResult<Ignored> {
    send_empty(Verb::Put, &format!("/messages/{id}/read")).await
}

pub async fn delete(id: &str) -> ApiResult<Ignored> {
    send_empty(Verb::Delete, &format!("/messages/{id}")).await
}
