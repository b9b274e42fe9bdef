mod client;
mod error;
mod http;
mod pkce;
mod request;
mod resource_owner;
mod scopes;
mod spotify;
mod state;
mod tokens;

// Core
pub use client::OAuth2Client;
pub use error::{Error, check_response};
pub use http::{HttpClient, HttpRequest, HttpResponse, Method};
pub use resource_owner::SpotifyResourceOwner;
pub use scopes::Scope;
pub use spotify::{Spotify, SpotifyOptions};
pub use tokens::OAuth2Tokens;

// Utilities
pub use pkce::{CodeChallengeMethod, create_code_challenge, generate_code_verifier};
pub use state::generate_state;

// Default HTTP client (behind feature flag)
#[cfg(feature = "reqwest-client")]
pub use http::{ReqwestClient, default_client};
