use common::requests::{Ignored, UploadResponse};

use super::client::{image_form, send_empty, send_form, ApiResult, Verb};

/// Uploads a picture and returns its public URL.
pub async fn image(file: &web_sys::File) -> ApiResult<String> {
    let form = image_form(file, None)?;
    send_form::<UploadResponse>("/upload/avatar", form)
        .await
        .map(|response| response.url)
}

pub async fn delete(filename: &str) -> ApiResult<Ignored> {
    send_empty(Verb::Delete, &format!("/upload/{filename}")).await
}
