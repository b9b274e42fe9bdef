use url::Url;

use crate::client::OAuth2Client;
use crate::error::Error;
use crate::http::HttpClient;
use crate::pkce::CodeChallengeMethod;
use crate::resource_owner::SpotifyResourceOwner;
use crate::scopes::Scope;
use crate::tokens::OAuth2Tokens;

const DEFAULT_AUTH_HOST: &str = "https://accounts.spotify.com";
const DEFAULT_API_HOST: &str = "https://api.spotify.com";

const AUTHORIZE_PATH: &str = "/authorize";
const TOKEN_PATH: &str = "/api/token";
const RESOURCE_OWNER_PATH: &str = "/v1/me";

/// Configuration for creating a [`Spotify`] client.
///
/// Use this when you need a custom [`HttpClient`] (e.g. a pre-configured
/// `reqwest::Client` with custom timeouts or proxies) or non-default hosts.
/// For the common case, use [`Spotify::new`] which uses the built-in
/// default client and production hosts.
pub struct SpotifyOptions<'a, H: HttpClient> {
    pub client_id: String,
    /// `None` for public clients (mobile/desktop apps using PKCE).
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    /// Override the accounts host serving the authorization and token
    /// endpoints. Defaults to `https://accounts.spotify.com`.
    pub auth_host: Option<String>,
    /// Override the Web API host serving the resource-owner endpoint.
    /// Defaults to `https://api.spotify.com`.
    pub api_host: Option<String>,
    pub http_client: &'a H,
}

/// OAuth 2.0 client for [Spotify](https://developer.spotify.com/documentation/web-api/concepts/authorization).
///
/// Supports the full authorization-code flow with optional PKCE (S256),
/// token refresh, and fetching the authenticated user's profile. The
/// client can be configured as either a confidential client (with client
/// secret, sent via Basic auth) or a public client (without one).
///
/// # Setup
///
/// 1. Create an app in the [Spotify Developer Dashboard](https://developer.spotify.com/dashboard).
/// 2. Note your **Client ID** and **Client Secret** from the app settings.
/// 3. Add a **Redirect URI** in the app settings that matches the
///    `redirect_uri` you pass to [`Spotify::new`].
///
/// # Example
///
/// ```rust
/// use spotify_oauth::{Scope, Spotify, generate_state};
///
/// # async fn example() -> Result<(), spotify_oauth::Error> {
/// let spotify = Spotify::new(
///     "your-client-id",
///     Some("your-client-secret".to_string()),
///     "https://example.com/callback",
/// );
///
/// // Step 1: Generate CSRF state and redirect the user.
/// let state = generate_state();
/// let url = spotify.authorization_url(
///     &state,
///     &[Scope::UserReadEmail, Scope::UserReadPrivate],
///     None,
/// )?;
/// // Store `state` in the user's session, then redirect to `url`.
///
/// // Step 2: In your callback handler, exchange the code for tokens.
/// let tokens = spotify
///     .validate_authorization_code("authorization-code", None)
///     .await?;
///
/// // Step 3: Fetch the authenticated user's profile.
/// let me = spotify.resource_owner(tokens.access_token()?).await?;
/// println!("Hello, {}", me.display_name().unwrap_or("anonymous"));
/// # Ok(())
/// # }
/// ```
pub struct Spotify<'a, H: HttpClient> {
    client: OAuth2Client,
    http_client: &'a H,
    auth_host: String,
    api_host: String,
}

impl<'a, H: HttpClient> Spotify<'a, H> {
    /// Creates a Spotify client from a [`SpotifyOptions`] struct.
    pub fn from_options(options: SpotifyOptions<'a, H>) -> Self {
        Self {
            http_client: options.http_client,
            client: OAuth2Client::new(
                options.client_id,
                options.client_secret,
                Some(options.redirect_uri),
            ),
            auth_host: options
                .auth_host
                .unwrap_or_else(|| DEFAULT_AUTH_HOST.to_string()),
            api_host: options
                .api_host
                .unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
        }
    }
}

#[cfg(feature = "reqwest-client")]
impl Spotify<'static, crate::http::ReqwestClient> {
    /// Creates a new Spotify OAuth 2.0 client using the default HTTP
    /// client and production hosts.
    ///
    /// # Arguments
    ///
    /// * `client_id` - The client ID from Spotify's developer dashboard.
    /// * `client_secret` - The client secret. Pass `None` to create a
    ///   public client (for mobile/desktop apps with PKCE).
    /// * `redirect_uri` - The URI Spotify redirects to after authorization.
    ///   Must match one configured in your Spotify app settings.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: Option<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self::from_options(SpotifyOptions {
            client_id: client_id.into(),
            client_secret,
            redirect_uri: redirect_uri.into(),
            auth_host: None,
            api_host: None,
            http_client: crate::http::default_client(),
        })
    }
}

impl<'a, H: HttpClient> Spotify<'a, H> {
    /// Returns the provider name (`"Spotify"`).
    pub fn name(&self) -> &'static str {
        "Spotify"
    }

    /// The base URL for authorizing a client: `<auth host>/authorize`.
    pub fn authorization_endpoint(&self) -> String {
        format!("{}{}", self.auth_host, AUTHORIZE_PATH)
    }

    /// The URL for requesting an access token: `<auth host>/api/token`.
    pub fn token_endpoint(&self) -> String {
        format!("{}{}", self.auth_host, TOKEN_PATH)
    }

    /// The URL for requesting the resource owner's details:
    /// `<api host>/v1/me`. The access token is never part of the URL;
    /// it is sent as a bearer Authorization header.
    pub fn resource_owner_endpoint(&self) -> String {
        format!("{}{}", self.api_host, RESOURCE_OWNER_PATH)
    }

    /// Scopes requested when the caller supplies none. Always empty:
    /// scope selection is entirely caller-driven.
    pub fn default_scopes(&self) -> &'static [Scope] {
        &[]
    }

    /// Builds the Spotify authorization URL to redirect the user to.
    ///
    /// # Arguments
    ///
    /// * `state` - A CSRF token. Use [`generate_state`](crate::generate_state)
    ///   to create one and store it in the user's session.
    /// * `scopes` - The scopes to request. An empty slice requests none
    ///   (the `scope` parameter is omitted).
    /// * `code_verifier` - Optional PKCE code verifier. Use
    ///   [`generate_code_verifier`](crate::generate_code_verifier) to
    ///   create one. Pass `None` to skip PKCE.
    pub fn authorization_url(
        &self,
        state: &str,
        scopes: &[Scope],
        code_verifier: Option<&str>,
    ) -> Result<Url, Error> {
        let scopes: Vec<&str> = scopes.iter().map(|s| s.as_str()).collect();
        let endpoint = self.authorization_endpoint();

        match code_verifier {
            Some(verifier) => Ok(self.client.create_authorization_url_with_pkce(
                &endpoint,
                state,
                CodeChallengeMethod::S256,
                verifier,
                &scopes,
            )),
            None => Ok(self
                .client
                .create_authorization_url(&endpoint, state, &scopes)),
        }
    }

    /// Exchanges an authorization code for access and refresh tokens.
    ///
    /// Call this in your redirect URI handler after Spotify redirects
    /// back with a `code` query parameter. If PKCE was used, the
    /// `code_verifier` must be the value used to build the authorization
    /// URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Provider`] if Spotify rejects the code, or
    /// [`Error::Http`] on network failure.
    pub async fn validate_authorization_code(
        &self,
        code: &str,
        code_verifier: Option<&str>,
    ) -> Result<OAuth2Tokens, Error> {
        self.client
            .validate_authorization_code(
                self.http_client,
                &self.token_endpoint(),
                code,
                code_verifier,
            )
            .await
    }

    /// Refreshes an expired access token using a refresh token.
    ///
    /// Spotify access tokens expire after 1 hour. The refresh response
    /// may omit a new refresh token, in which case the old one remains
    /// valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Provider`] if the refresh token is invalid or
    /// revoked, or [`Error::Http`] on network failure.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<OAuth2Tokens, Error> {
        self.client
            .refresh_access_token(self.http_client, &self.token_endpoint(), refresh_token)
            .await
    }

    /// Fetches the authenticated user's profile from `/v1/me`.
    ///
    /// Which fields the profile contains depends on the scopes the token
    /// was granted; see [`SpotifyResourceOwner`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Provider`] if Spotify rejects the token (e.g.
    /// expired or insufficient scope), or [`Error::Http`] on network
    /// failure.
    pub async fn resource_owner(&self, access_token: &str) -> Result<SpotifyResourceOwner, Error> {
        let data = self
            .client
            .fetch_resource_owner(
                self.http_client,
                &self.resource_owner_endpoint(),
                access_token,
            )
            .await?;
        Ok(SpotifyResourceOwner::new(data))
    }
}
