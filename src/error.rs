use http::StatusCode;

use crate::http::HttpResponse;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Spotify rejected the request (HTTP status >= 400). The message and
    /// code are normalized from the response body; see [`check_response`].
    #[error("{message} (code {code})")]
    Provider {
        message: String,
        code: u16,
        body: String,
    },

    /// Successful status but the body is not valid JSON.
    #[error("Unparseable response body (HTTP {status})")]
    UnexpectedBody { status: u16, body: String },

    /// Network / transport error from the HTTP client.
    #[error("HTTP request failed: {0}")]
    Http(#[from] Box<dyn std::error::Error + Send + Sync>),

    /// A required field is missing from the token response JSON.
    #[error("Missing or invalid field: {field}")]
    MissingField { field: &'static str },
}

/// Check a Spotify response for errors.
///
/// Any status below 400 is a success; the body shape is not inspected.
/// A status of 400 or above is normalized into [`Error::Provider`] from
/// the parsed body (`data` is `Null` when the body was not valid JSON):
///
/// - message defaults to the HTTP reason phrase, code to the HTTP status;
/// - a top-level `error_description` string replaces the message
///   (token endpoint shape, RFC 6749);
/// - an `error` *object* replaces both: its `message` becomes the message
///   and its `status` becomes the code (Web API shape). This runs last,
///   so it wins over `error_description` when both are present.
///
/// A plain-string `error` value carries no message of its own and is
/// ignored, matching Spotify's documented error shapes.
pub fn check_response(response: &HttpResponse, data: &serde_json::Value) -> Result<(), Error> {
    if response.status < 400 {
        return Ok(());
    }

    let mut message = reason_phrase(response.status).to_string();
    let mut code = response.status;

    if let Some(description) = data.get("error_description").and_then(|v| v.as_str()) {
        message = description.to_string();
    }

    if let Some(error) = data.get("error").filter(|e| e.is_object()) {
        if let Some(m) = error.get("message") {
            message = match m.as_str() {
                Some(s) => s.to_string(),
                None => m.to_string(),
            };
        }
        if let Some(status) = error.get("status").and_then(coerce_status) {
            code = status;
        }
    }

    Err(Error::Provider {
        message,
        code,
        body: String::from_utf8_lossy(&response.body).into_owned(),
    })
}

fn reason_phrase(status: u16) -> &'static str {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown Error")
}

/// Spotify reports `error.status` as a number, but accept a numeric
/// string too.
fn coerce_status(value: &serde_json::Value) -> Option<u16> {
    match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
