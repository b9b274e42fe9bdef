use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng as _;
use sha2::{Digest, Sha256};

/// PKCE code challenge method (RFC 7636). Spotify supports S256.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeChallengeMethod {
    S256,
    Plain,
}

/// Generate a cryptographically random code verifier.
/// 32 random bytes, base64url-encoded without padding (43 chars).
pub fn generate_code_verifier() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Derive the code challenge from a verifier.
/// - S256: SHA-256 hash of verifier, base64url-encoded without padding.
/// - Plain: the verifier itself.
pub fn create_code_challenge(verifier: &str, method: CodeChallengeMethod) -> String {
    match method {
        CodeChallengeMethod::S256 => {
            let hash = Sha256::digest(verifier.as_bytes());
            URL_SAFE_NO_PAD.encode(hash)
        }
        CodeChallengeMethod::Plain => verifier.to_string(),
    }
}
