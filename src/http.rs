use std::future::Future;

/// HTTP method. Token traffic is POSTed; the resource-owner profile
/// endpoint is a GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A minimal HTTP request representation.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// A minimal HTTP response representation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Trait for sending HTTP requests. Implementations must be `Send + Sync`
/// so they can be shared across async tasks.
pub trait HttpClient: Send + Sync {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, Box<dyn std::error::Error + Send + Sync>>> + Send;
}

#[cfg(feature = "reqwest-client")]
mod reqwest_impl {
    use super::{HttpClient, HttpRequest, HttpResponse, Method};

    pub struct ReqwestClient {
        inner: reqwest::Client,
    }

    impl ReqwestClient {
        pub fn new() -> Self {
            Self {
                inner: reqwest::Client::new(),
            }
        }
    }

    impl Default for ReqwestClient {
        fn default() -> Self {
            Self::new()
        }
    }

    impl HttpClient for ReqwestClient {
        async fn send(
            &self,
            req: HttpRequest,
        ) -> Result<HttpResponse, Box<dyn std::error::Error + Send + Sync>> {
            let mut builder = match req.method {
                Method::Get => self.inner.get(&req.url),
                Method::Post => self.inner.post(&req.url),
            };

            for (name, value) in &req.headers {
                builder = builder.header(name, value);
            }

            builder = builder.body(req.body);

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?.to_vec();

            Ok(HttpResponse { status, body })
        }
    }

    /// Shared default client, created on first use.
    pub fn default_client() -> &'static ReqwestClient {
        use std::sync::OnceLock;
        static CLIENT: OnceLock<ReqwestClient> = OnceLock::new();
        CLIENT.get_or_init(ReqwestClient::new)
    }
}

#[cfg(feature = "reqwest-client")]
pub use reqwest_impl::{ReqwestClient, default_client};
