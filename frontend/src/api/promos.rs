use common::model::promo::Promo;
use common::requests::{Ignored, PromoPayload};

use super::client::{get, image_form, send_empty, send_form, send_json, ApiResult, Verb};

/// Public banner listing, used by the carousel.
pub async fn public() -> ApiResult<Vec<Promo>> {
    get("/promos").await
}

pub async fn all() -> ApiResult<Vec<Promo>> {
    get("/promos/all").await
}

pub async fn create(payload: &PromoPayload) -> ApiResult<Promo> {
    send_json(Verb::Post, "/promos", payload).await
}

pub async fn update(id: &str, patch: &PromoPayload) -> ApiResult<Promo> {
    send_json(Verb::Put, &format!("/promos/{id}"), patch).await
}

pub async fn delete(id: &str) -> ApiResult<Ignored> {
    send_empty(Verb::Delete, &format!("/promos/{id}")).await
}

/// Replaces the desktop or mobile picture of an existing banner.
pub async fn upload_image(id: &str, file: &web_sys::File, target: &str) -> ApiResult<Ignored> {
    let form = image_form(file, Some(target))?;
    send_form(&format!("/promos/{id}/upload"), form).await
}
