use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use common::requests::ApiErrorBody;
use futures_util::TryStreamExt;
use log::{debug, error};
use thiserror::Error;

/// Headers that describe a single connection and never cross the proxy.
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Servidor indisponível. Tente novamente em instantes.")]
    Unreachable(#[from] reqwest::Error),
    #[error("Método HTTP não suportado: {0}")]
    Method(String),
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::Unreachable(_) => StatusCode::BAD_GATEWAY,
            ProxyError::Method(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiErrorBody {
            message: Some(self.to_string()),
            error: None,
        })
    }
}

#[derive(Clone)]
pub struct Upstream {
    client: reqwest::Client,
    origin: String,
}

impl Upstream {
    pub fn new(origin: &str) -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self {
            client,
            origin: origin.trim_end_matches('/').to_string(),
        })
    }

    pub fn target(&self, path_and_query: &str) -> String {
        format!("{}{}", self.origin, path_and_query)
    }
}

/// Request headers that travel upstream. `host` and `content-length` are
/// rewritten by the client.
fn forward_request_header(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    !HOP_BY_HOP.contains(&name.as_str()) && name != "host" && name != "content-length"
}

/// Response headers that travel back. The body is re-streamed, so the
/// length is recomputed by actix.
fn forward_response_header(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    !HOP_BY_HOP.contains(&name.as_str()) && name != "content-length"
}

async fn forward(
    req: HttpRequest,
    body: web::Bytes,
    upstream: web::Data<Upstream>,
) -> Result<HttpResponse, ProxyError> {
    let path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| req.path());
    let url = upstream.target(path);
    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
        .map_err(|_| ProxyError::Method(req.method().to_string()))?;

    let mut outgoing = upstream.client.request(method, &url);
    for (name, value) in req.headers() {
        if forward_request_header(name.as_str()) {
            outgoing = outgoing.header(name.as_str(), value.as_bytes());
        }
    }

    debug!("{} {} -> {}", req.method(), path, url);
    let response = outgoing.body(body).send().await.map_err(|err| {
        error!("upstream request to {} failed: {}", url, err);
        ProxyError::from(err)
    })?;

    let status = StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut reply = HttpResponse::build(status);
    for (name, value) in response.headers() {
        if forward_response_header(name.as_str()) {
            reply.append_header((name.as_str(), value.as_bytes()));
        }
    }
    Ok(reply.streaming(response.bytes_stream().map_err(std::io::Error::other)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/{tail:.*}", web::route().to(forward))
        .route("/uploads/{tail:.*}", web::route().to(forward));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;
    use actix_web::App;

    #[test]
    fn hop_by_hop_headers_are_dropped() {
        for name in ["Connection", "keep-alive", "Transfer-Encoding", "Upgrade", "TE"] {
            assert!(!forward_request_header(name), "{name}");
            assert!(!forward_response_header(name), "{name}");
        }
        assert!(!forward_request_header("Host"));
        assert!(forward_request_header("Authorization"));
        assert!(forward_request_header("content-type"));
        assert!(forward_response_header("set-cookie"));
        assert!(forward_response_header("cache-control"));
    }

    #[test]
    fn target_keeps_path_and_query() {
        let upstream = Upstream::new("http://localhost:5000/").unwrap();
        assert_eq!(
            upstream.target("/api/products?search=sonda&page=2"),
            "http://localhost:5000/api/products?search=sonda&page=2"
        );
        assert_eq!(upstream.target("/uploads/a.png"), "http://localhost:5000/uploads/a.png");
    }

    #[actix_web::test]
    async fn unreachable_upstream_answers_bad_gateway() {
        let upstream = Upstream::new("http://127.0.0.1:9").unwrap();
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(upstream))
                .configure(configure),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/api/products").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: serde_json::Value = actix_test::read_body_json(resp).await;
        assert!(body["message"].as_str().is_some_and(|text| !text.is_empty()));
        assert!(body.get("error").is_none());
    }
}
