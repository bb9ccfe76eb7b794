//! Webhook signature verification using HMAC-SHA256.
//!
//! GitFox signs each delivery by computing HMAC-SHA256 over the raw request
//! body with the webhook's shared secret and sending the result hex-encoded
//! in the `X-Gitfox-Signature` header. There is no algorithm prefix; the
//! header value is bare hex.
//!
//! Verification must run over the body bytes exactly as received, not a
//! re-serialized form: any re-encoding would change the bytes and break the
//! MAC.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes the HMAC-SHA256 signature of a payload using the given secret.
///
/// Useful for tests and for senders that need to produce the signature
/// header.
pub fn compute_signature(payload: &[u8], secret: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(payload);
    mac.finalize().into_bytes().to_vec()
}

/// Formats a signature as a GitFox header value (bare lowercase hex).
pub fn encode_signature_header(signature: &[u8]) -> String {
    hex::encode(signature)
}

/// Verifies a hex-encoded webhook signature against the payload and secret.
///
/// Returns `true` only if the header decodes as hex and matches the
/// HMAC-SHA256 of the payload. The comparison is constant-time to avoid
/// timing side channels. Malformed headers yield `false`, never a panic.
pub fn verify_signature(payload: &[u8], signature_header: &str, secret: &[u8]) -> bool {
    let supplied = match hex::decode(signature_header) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };

    let mut mac = match HmacSha256::new_from_slice(secret) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(payload);

    // Constant-time comparison via the HMAC library
    mac.verify_slice(&supplied).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_correctly_signed_payload() {
        let payload = b"{\"trigger\":\"branch_created\"}";
        let secret = b"s3cr3t";

        let header = encode_signature_header(&compute_signature(payload, secret));
        assert!(verify_signature(payload, &header, secret));
    }

    #[test]
    fn rejects_wrong_secret() {
        let payload = b"test payload";
        let header = encode_signature_header(&compute_signature(payload, b"correct"));

        assert!(!verify_signature(payload, &header, b"wrong"));
    }

    #[test]
    fn rejects_modified_payload() {
        let secret = b"secret";
        let header = encode_signature_header(&compute_signature(b"original", secret));

        assert!(!verify_signature(b"tampered", &header, secret));
    }

    #[test]
    fn rejects_malformed_header() {
        let payload = b"test";
        let secret = b"secret";

        assert!(!verify_signature(payload, "", secret));
        assert!(!verify_signature(payload, "zzzz", secret));
        assert!(!verify_signature(payload, "abc", secret)); // odd length
        assert!(!verify_signature(payload, "sha256=abcd", secret)); // no prefix form
    }

    #[test]
    fn rejects_truncated_signature() {
        let payload = b"test";
        let secret = b"secret";
        let full = encode_signature_header(&compute_signature(payload, secret));

        assert!(!verify_signature(payload, &full[..32], secret));
    }

    #[test]
    fn uppercase_hex_is_accepted() {
        let payload = b"payload";
        let secret = b"secret";
        let header = encode_signature_header(&compute_signature(payload, secret)).to_uppercase();

        assert!(verify_signature(payload, &header, secret));
    }

    #[test]
    fn empty_payload_and_secret_still_roundtrip() {
        let header = encode_signature_header(&compute_signature(b"", b""));
        assert!(verify_signature(b"", &header, b""));
    }

    #[test]
    fn signature_is_32_bytes() {
        assert_eq!(compute_signature(b"any", b"any").len(), 32);
    }

    proptest! {
        /// Signing and verifying with the same secret always succeeds.
        #[test]
        fn prop_sign_verify_roundtrip(payload: Vec<u8>, secret: Vec<u8>) {
            let header = encode_signature_header(&compute_signature(&payload, &secret));
            prop_assert!(verify_signature(&payload, &header, &secret));
        }

        /// Verifying with a different secret always fails.
        #[test]
        fn prop_wrong_secret_fails(payload: Vec<u8>, secret1: Vec<u8>, secret2: Vec<u8>) {
            prop_assume!(secret1 != secret2);

            let header = encode_signature_header(&compute_signature(&payload, &secret1));
            prop_assert!(!verify_signature(&payload, &header, &secret2));
        }

        /// Any modification to the payload breaks the signature.
        #[test]
        fn prop_modified_payload_fails(original: Vec<u8>, modified: Vec<u8>, secret: Vec<u8>) {
            prop_assume!(original != modified);

            let header = encode_signature_header(&compute_signature(&original, &secret));
            prop_assert!(!verify_signature(&modified, &header, &secret));
        }

        /// Arbitrary header strings never panic the verifier.
        #[test]
        fn prop_malformed_header_no_panic(header: String, payload: Vec<u8>, secret: Vec<u8>) {
            let _ = verify_signature(&payload, &header, &secret);
        }
    }
}
