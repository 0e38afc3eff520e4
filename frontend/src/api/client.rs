//! Request plumbing shared by every resource module.
//!
//! Each call goes to `/api{path}` with the cached bearer token. Non-2xx
//! answers are classified into [`ApiError`]; the ones that mean the
//! credentials are gone clear the session and hard-navigate to a public page
//! before the error reaches the caller.

use common::error::{ApiError, LogoutReason};
use common::requests::ApiErrorBody;
use gloo_console::error;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use crate::storage::client_store;

pub const API_BASE: &str = "/api";

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Copy)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

fn builder(verb: Verb, path: &str) -> RequestBuilder {
    let url = format!("{API_BASE}{path}");
    let builder = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
        Verb::Put => Request::put(&url),
        Verb::Delete => Request::delete(&url),
    };
    match client_store().session().token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

pub async fn get<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    send(path, builder(Verb::Get, path).build()).await
}

pub async fn get_with<T: DeserializeOwned>(path: &str, query: &[(&'static str, String)]) -> ApiResult<T> {
    let request = builder(Verb::Get, path)
        .query(query.iter().map(|(key, value)| (*key, value.as_str())))
        .build();
    send(path, request).await
}

pub async fn send_json<B, T>(verb: Verb, path: &str, body: &B) -> ApiResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    send(path, builder(verb, path).json(body)).await
}

pub async fn send_empty<T: DeserializeOwned>(verb: Verb, path: &str) -> ApiResult<T> {
    send(path, builder(verb, path).build()).await
}

/// Multipart POST; the browser sets the boundary header.
pub async fn send_form<T: DeserializeOwned>(path: &str, form: FormData) -> ApiResult<T> {
    send(path, builder(Verb::Post, path).body(form)).await
}

async fn send<T: DeserializeOwned>(path: &str, request: Result<Request, gloo_net::Error>) -> ApiResult<T> {
    let request = request.map_err(|err| ApiError::Network(err.to_string()))?;
    let response = request.send().await.map_err(|err| {
        error!(format!("{API_BASE}{path}: {err}"));
        ApiError::Network(err.to_string())
    })?;
    read(path, response).await
}

async fn read<T: DeserializeOwned>(path: &str, response: Response) -> ApiResult<T> {
    let ok = response.ok();
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    if !ok {
        let body: ApiErrorBody = serde_json::from_str(&text).unwrap_or_default();
        let failure = ApiError::from_response(status, &body);
        error!(format!("{API_BASE}{path}: {failure}"));
        if let Some(reason) = failure.logout_reason() {
            force_logout(reason);
        }
        return Err(failure);
    }

    let text = if text.trim().is_empty() { "null" } else { text.as_str() };
    serde_json::from_str(text).map_err(|err| {
        error!(format!("{API_BASE}{path}: {err}"));
        ApiError::Decode(err.to_string())
    })
}

fn force_logout(reason: LogoutReason) {
    client_store().session().force_logout();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(reason.redirect_path());
    }
}

/// Wraps one file into the `image` field the upload endpoints expect.
pub fn image_form(file: &web_sys::File, target: Option<&str>) -> ApiResult<FormData> {
    let form = FormData::new().map_err(|_| ApiError::Network("FormData indisponível".into()))?;
    form.append_with_blob("image", file)
        .map_err(|_| ApiError::Network("arquivo inválido".into()))?;
    if let Some(target) = target {
        form.append_with_str("target", target)
            .map_err(|_| ApiError::Network("arquivo inválido".into()))?;
    }
    Ok(form)
}
