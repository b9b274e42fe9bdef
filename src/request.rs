use base64::Engine;

use crate::Error;
use crate::error::check_response;
use crate::http::{HttpClient, HttpRequest, HttpResponse, Method};

/// Build a form-encoded POST request for the token endpoint.
/// Sets Content-Type, Accept: application/json, User-Agent.
pub fn create_token_request(endpoint: &str, body: &[(String, String)]) -> HttpRequest {
    let encoded_body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(body)
        .finish();

    HttpRequest {
        method: Method::Post,
        url: endpoint.to_string(),
        headers: vec![
            (
                "Content-Type".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            ),
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), "spotify-oauth".to_string()),
        ],
        body: encoded_body.into_bytes(),
    }
}

/// Build a bearer-authenticated GET request for a Web API endpoint.
/// The access token travels in the Authorization header, never in the URL.
pub fn create_bearer_request(endpoint: &str, access_token: &str) -> HttpRequest {
    HttpRequest {
        method: Method::Get,
        url: endpoint.to_string(),
        headers: vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), "spotify-oauth".to_string()),
            (
                "Authorization".to_string(),
                format!("Bearer {access_token}"),
            ),
        ],
        body: Vec::new(),
    }
}

/// Encode client credentials as HTTP Basic auth header value.
/// Returns `Basic <base64(client_id:client_secret)>`.
pub fn encode_basic_credentials(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{client_id}:{client_secret}");
    let encoded = base64::engine::general_purpose::STANDARD.encode(credentials.as_bytes());
    format!("Basic {encoded}")
}

/// Send a request and parse the JSON body, checking for Spotify errors.
/// - status >= 400 -> Err(Error::Provider { .. }), normalized from the body
/// - status < 400 with invalid JSON -> Err(Error::UnexpectedBody { .. })
/// - status < 400 with valid JSON -> Ok(parsed body)
pub async fn send_json_request(
    client: &(impl HttpClient + ?Sized),
    request: HttpRequest,
) -> Result<serde_json::Value, Error> {
    let response: HttpResponse = client.send(request).await?;

    let data = serde_json::from_slice::<serde_json::Value>(&response.body)
        .unwrap_or(serde_json::Value::Null);

    check_response(&response, &data)?;

    if data.is_null() {
        return Err(Error::UnexpectedBody {
            status: response.status,
            body: String::from_utf8_lossy(&response.body).into_owned(),
        });
    }

    Ok(data)
}
