use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;

/// Generate a cryptographically random `state` parameter for CSRF
/// protection. 32 random bytes, base64url-encoded without padding.
pub fn generate_state() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    URL_SAFE_NO_PAD.encode(bytes)
}
