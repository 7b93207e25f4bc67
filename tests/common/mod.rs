use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use checkform::config::Config;

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit form-urlencoded data, return (body, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit a raw body with an explicit content type, return (body, status).
    pub async fn submit_raw(&self, body: &str, content_type: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .header("content-type", content_type)
            .body(body.to_string())
            .send()
            .await
            .expect("submit raw failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit a raw byte body with an explicit content type, return (body, status).
    pub async fn submit_raw_bytes(&self, body: Vec<u8>, content_type: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .header("content-type", content_type)
            .body(body)
            .send()
            .await
            .expect("submit raw bytes failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit a multipart form, return (body, status).
    pub async fn submit_multipart(&self, form: reqwest::multipart::Form) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .multipart(form)
            .send()
            .await
            .expect("submit multipart failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Plain GET, returning the raw response.
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed")
    }
}

/// Spawn a test app on a random port.
pub async fn spawn_app() -> TestApp {
    let config = Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        static_dir: "static".to_string(),
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
    };

    let app = checkform::build_app(config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp { addr, client }
}
