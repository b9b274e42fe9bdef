use serde_json::Value;

/// The authenticated user's profile, as returned by Spotify's `/v1/me`
/// endpoint.
///
/// A read-only view over the raw profile JSON. Every accessor is an
/// independent key lookup that returns `None` when the field is absent;
/// Spotify omits fields the granted scopes do not cover (e.g. `email`
/// without `user-read-email`). The underlying payload is never modified
/// and is available verbatim via [`data`](Self::data).
#[derive(Debug, Clone)]
pub struct SpotifyResourceOwner {
    data: Value,
}

impl SpotifyResourceOwner {
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// The raw profile JSON, exactly as the endpoint returned it.
    pub fn data(&self) -> &Value {
        &self.data
    }

    fn value(&self, key: &str) -> Option<&Value> {
        self.data.get(key).filter(|v| !v.is_null())
    }

    /// ISO 3166-1 alpha-2 country code. Requires `user-read-private`.
    pub fn country(&self) -> Option<&str> {
        self.value("country").and_then(Value::as_str)
    }

    /// Display name, if the user has set one.
    pub fn display_name(&self) -> Option<&str> {
        self.value("display_name").and_then(Value::as_str)
    }

    /// Email address. Requires `user-read-email`. Not verified by Spotify.
    pub fn email(&self) -> Option<&str> {
        self.value("email").and_then(Value::as_str)
    }

    /// Explicit-content filter settings. Requires `user-read-private`.
    pub fn explicit_content(&self) -> Option<&Value> {
        self.value("explicit_content")
    }

    /// Known external URLs for the user (e.g. their Spotify profile page).
    pub fn external_urls(&self) -> Option<&Value> {
        self.value("external_urls")
    }

    /// Follower information for the user.
    pub fn followers(&self) -> Option<&Value> {
        self.value("followers")
    }

    /// Web API endpoint link for the user.
    pub fn href(&self) -> Option<&str> {
        self.value("href").and_then(Value::as_str)
    }

    /// Spotify user ID.
    pub fn id(&self) -> Option<&str> {
        self.value("id").and_then(Value::as_str)
    }

    /// Profile images, largest first.
    pub fn images(&self) -> Option<&Value> {
        self.value("images")
    }

    /// Subscription level (`"premium"`, `"free"`, ...). Requires
    /// `user-read-private`.
    pub fn product(&self) -> Option<&str> {
        self.value("product").and_then(Value::as_str)
    }

    /// Object type; always `"user"` for this endpoint.
    pub fn owner_type(&self) -> Option<&str> {
        self.value("type").and_then(Value::as_str)
    }

    /// Spotify URI for the user.
    pub fn uri(&self) -> Option<&str> {
        self.value("uri").and_then(Value::as_str)
    }
}
