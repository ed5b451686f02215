//! Opaque invite token generation.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::rngs::OsRng;
use rand::RngCore;

/// Length of every generated invite token.
pub const TOKEN_LEN: usize = 44;

// 33 bytes of entropy encode to exactly TOKEN_LEN unpadded base64 characters.
const TOKEN_BYTES: usize = 33;

/// Source of opaque, fixed-length identifiers.
///
/// The repository takes this as a swappable capability so tests can pin
/// deterministic tokens without touching store logic.
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Default generator backed by the operating system entropy source.
pub struct SecureTokenGenerator;

impl TokenGenerator for SecureTokenGenerator {
    fn generate(&self) -> String {
        let mut buf = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut buf);
        URL_SAFE_NO_PAD.encode(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_have_fixed_length() {
        let generator = SecureTokenGenerator;
        for _ in 0..32 {
            assert_eq!(generator.generate().len(), TOKEN_LEN);
        }
    }

    #[test]
    fn generated_tokens_are_url_safe() {
        let generator = SecureTokenGenerator;
        let token = generator.generate();
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn generated_tokens_do_not_repeat() {
        let generator = SecureTokenGenerator;
        let first = generator.generate();
        let second = generator.generate();
        assert_ne!(first, second);
    }
}
