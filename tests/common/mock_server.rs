use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A mock Spotify server built on `wiremock`. Serves both the accounts
/// endpoints (`POST /api/token`) and the Web API profile endpoint
/// (`GET /v1/me`) with configurable behavior.
pub struct MockSpotifyServer {
    server: MockServer,
}

impl MockSpotifyServer {
    /// Start a new mock server on a random available port.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL of the mock server (e.g. "http://127.0.0.1:PORT").
    /// Used as both the auth host and the api host override.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Mount a handler that returns a successful token response (HTTP 200)
    /// with the given JSON body at `POST /api/token`.
    pub async fn mock_token_success(&self, response: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response))
            .mount(&self.server)
            .await;
    }

    /// Mount a handler that returns the given status and JSON error body
    /// at `POST /api/token`.
    pub async fn mock_token_error(&self, status: u16, body: serde_json::Value) {
        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(ResponseTemplate::new(status).set_body_json(&body))
            .mount(&self.server)
            .await;
    }

    /// Mount a handler that serves the given profile JSON at `GET /v1/me`,
    /// requiring the expected bearer token.
    pub async fn mock_resource_owner(&self, access_token: &str, profile: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/v1/me"))
            .and(header("Authorization", format!("Bearer {access_token}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(&profile))
            .mount(&self.server)
            .await;
    }

    /// Mount a handler that returns the given status and JSON error body
    /// at `GET /v1/me`.
    pub async fn mock_resource_owner_error(&self, status: u16, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/v1/me"))
            .respond_with(ResponseTemplate::new(status).set_body_json(&body))
            .mount(&self.server)
            .await;
    }

    /// Mount a handler that returns a bare status with a non-JSON body
    /// at `POST /api/token`.
    pub async fn mock_token_raw(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Assert that the last request to the mock server contained
    /// the expected form-urlencoded parameters in its body.
    pub async fn verify_token_request(&self, expected_params: &[(&str, &str)]) {
        let requests = self
            .server
            .received_requests()
            .await
            .expect("request recording enabled");
        let last = requests.last().expect("expected at least one request");
        let body_str = String::from_utf8(last.body.clone()).expect("body should be UTF-8");
        let parsed: Vec<(String, String)> = url::form_urlencoded::parse(body_str.as_bytes())
            .into_owned()
            .collect();

        for (key, value) in expected_params {
            let found = parsed.iter().any(|(k, v)| k == key && v == value);
            assert!(
                found,
                "expected form param {}={} in request body, got: {}",
                key, value, body_str
            );
        }
    }

    /// Assert that the last request contained a Basic auth header
    /// with the expected credentials.
    pub async fn verify_basic_auth(&self, client_id: &str, client_secret: &str) {
        use base64::Engine;
        let requests = self
            .server
            .received_requests()
            .await
            .expect("request recording enabled");
        let last = requests.last().expect("expected at least one request");
        let auth_header = last
            .headers
            .get("authorization")
            .expect("expected Authorization header");
        let expected_credentials = base64::engine::general_purpose::STANDARD
            .encode(format!("{}:{}", client_id, client_secret));
        let expected = format!("Basic {}", expected_credentials);
        assert_eq!(
            auth_header.to_str().unwrap(),
            expected,
            "Basic auth credentials mismatch"
        );
    }
}
