mod config;
mod proxy;

use crate::config::Config;
use crate::proxy::Upstream;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info, warn};
use mime_guess::from_path;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Product images go through the proxy as raw bodies.
const MAX_BODY: usize = 20 * 1024 * 1024;

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|err| {
        error!("{}", err);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
    })?;
    let upstream = Upstream::new(&config.upstream_url).map_err(std::io::Error::other)?;
    let url = config.public_url();

    if config.open_browser {
        let browser_url = url.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(500)).await;
            if let Err(err) = webbrowser::open(&browser_url) {
                warn!("could not open browser: {}", err);
            }
        });
    }

    info!("Server running at {} (upstream {})", url, config.upstream_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::PayloadConfig::new(MAX_BODY))
            .app_data(web::Data::new(upstream.clone()))
            .configure(proxy::configure)
            .default_service(web::route().to(serve_embedded))
    })
        .bind(config.socket_addr())?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;

    #[actix_web::test]
    async fn client_routes_fall_back_to_index() {
        let app = actix_test::init_service(App::new().default_service(web::route().to(serve_embedded))).await;

        let root = actix_test::call_and_read_body(&app, actix_test::TestRequest::get().uri("/").to_request()).await;
        let resp = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/admin/pedidos?trash=true").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));
        let fallback = actix_test::read_body(resp).await;
        assert_eq!(root, fallback);
    }
}
