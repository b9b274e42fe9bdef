use url::Url;

use crate::error::Error;
use crate::http::HttpClient;
use crate::pkce::{CodeChallengeMethod, create_code_challenge};
use crate::request::{
    create_bearer_request, create_token_request, encode_basic_credentials, send_json_request,
};
use crate::tokens::OAuth2Tokens;

pub struct OAuth2Client {
    client_id: String,
    /// None for public clients (credentials sent in body).
    /// Some for confidential clients (credentials sent via Basic auth).
    client_secret: Option<String>,
    redirect_uri: Option<String>,
}

impl OAuth2Client {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: Option<String>,
        redirect_uri: Option<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret,
            redirect_uri,
        }
    }

    /// Build an authorization URL with standard parameters:
    /// response_type=code, client_id, state, scope (space-joined), redirect_uri.
    /// The scope parameter is omitted entirely when no scopes are given.
    pub fn create_authorization_url(
        &self,
        authorization_endpoint: &str,
        state: &str,
        scopes: &[&str],
    ) -> Url {
        let mut url =
            Url::parse(authorization_endpoint).expect("invalid authorization endpoint URL");

        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.client_id)
            .append_pair("state", state);

        if !scopes.is_empty() {
            url.query_pairs_mut()
                .append_pair("scope", &scopes.join(" "));
        }

        if let Some(ref redirect_uri) = self.redirect_uri {
            url.query_pairs_mut()
                .append_pair("redirect_uri", redirect_uri);
        }

        url
    }

    /// Build an authorization URL with PKCE parameters appended:
    /// code_challenge, code_challenge_method.
    pub fn create_authorization_url_with_pkce(
        &self,
        authorization_endpoint: &str,
        state: &str,
        code_challenge_method: CodeChallengeMethod,
        code_verifier: &str,
        scopes: &[&str],
    ) -> Url {
        let mut url = self.create_authorization_url(authorization_endpoint, state, scopes);

        let code_challenge = create_code_challenge(code_verifier, code_challenge_method);
        let method_str = match code_challenge_method {
            CodeChallengeMethod::S256 => "S256",
            CodeChallengeMethod::Plain => "plain",
        };

        url.query_pairs_mut()
            .append_pair("code_challenge", &code_challenge)
            .append_pair("code_challenge_method", method_str);

        url
    }

    /// Exchange an authorization code for tokens.
    pub async fn validate_authorization_code(
        &self,
        http_client: &impl HttpClient,
        token_endpoint: &str,
        code: &str,
        code_verifier: Option<&str>,
    ) -> Result<OAuth2Tokens, Error> {
        let mut body = vec![
            ("grant_type".to_string(), "authorization_code".to_string()),
            ("code".to_string(), code.to_string()),
        ];

        if let Some(verifier) = code_verifier {
            body.push(("code_verifier".to_string(), verifier.to_string()));
        }

        if let Some(ref redirect_uri) = self.redirect_uri {
            body.push(("redirect_uri".to_string(), redirect_uri.clone()));
        }

        self.send_token_request(http_client, token_endpoint, body)
            .await
    }

    /// Refresh an access token.
    pub async fn refresh_access_token(
        &self,
        http_client: &impl HttpClient,
        token_endpoint: &str,
        refresh_token: &str,
    ) -> Result<OAuth2Tokens, Error> {
        let body = vec![
            ("grant_type".to_string(), "refresh_token".to_string()),
            ("refresh_token".to_string(), refresh_token.to_string()),
        ];

        self.send_token_request(http_client, token_endpoint, body)
            .await
    }

    /// Fetch the resource owner's details with a bearer token.
    /// Returns the raw parsed JSON; the caller wraps it.
    pub async fn fetch_resource_owner(
        &self,
        http_client: &impl HttpClient,
        details_endpoint: &str,
        access_token: &str,
    ) -> Result<serde_json::Value, Error> {
        let request = create_bearer_request(details_endpoint, access_token);
        send_json_request(http_client, request).await
    }

    async fn send_token_request(
        &self,
        http_client: &impl HttpClient,
        token_endpoint: &str,
        mut body: Vec<(String, String)>,
    ) -> Result<OAuth2Tokens, Error> {
        if self.client_secret.is_none() {
            body.push(("client_id".to_string(), self.client_id.clone()));
        }

        let mut request = create_token_request(token_endpoint, &body);

        if let Some(ref secret) = self.client_secret {
            request.headers.push((
                "Authorization".to_string(),
                encode_basic_credentials(&self.client_id, secret),
            ));
        }

        let data = send_json_request(http_client, request).await?;
        Ok(OAuth2Tokens::new(data))
    }
}
