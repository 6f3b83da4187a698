//! Request authentication for both endpoints.
//!
//! Discord signs every interaction with ed25519 over `timestamp || body`;
//! the relay and `/register` only compare a static shared secret.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use ed25519_dalek::{Signature, Verifier, VerifyingKey};

pub const SIGNATURE_HEADER: &str = "x-signature-ed25519";
pub const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Verifies a hex encoded ed25519 `signature` over `timestamp || body`.
pub fn verify_signature(key: &VerifyingKey, signature: &str, timestamp: &str, body: &[u8]) -> bool {
    let Ok(bytes) = hex::decode(signature) else {
        return false;
    };
    let Ok(signature) = Signature::from_slice(&bytes) else {
        return false;
    };

    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);

    key.verify(&message, &signature).is_ok()
}

/// Checks the Discord signature headers against the raw, unparsed body.
/// Missing headers never verify.
pub fn verify_interaction(key: &VerifyingKey, headers: &HeaderMap, body: &[u8]) -> bool {
    match (header(headers, SIGNATURE_HEADER), header(headers, TIMESTAMP_HEADER)) {
        (Some(signature), Some(timestamp)) => verify_signature(key, signature, timestamp, body),
        _ => false,
    }
}

/// Exact comparison of the `Authorization` header with a static secret.
pub fn verify_shared_secret(headers: &HeaderMap, secret: &str) -> bool {
    header(headers, AUTHORIZATION.as_str()) == Some(secret)
}
