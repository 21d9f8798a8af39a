use md5::{Digest, Md5};

use super::TransportError;
use crate::domain::{Credentials, Parameters};

/// Header carrying the request signature.
pub const SIGNATURE_HEADER: &str = "md5Sum";

/// Request body together with its signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    /// JSON serialization of the parameters, in insertion order.
    pub body: String,
    /// Lowercase hex MD5 of `body` followed by the channel key.
    pub signature: String,
}

/// Add the session token under `token` unless the caller already supplied one.
pub fn insert_token(mut parameters: Parameters, credentials: &Credentials) -> Parameters {
    if !parameters.contains_key("token") {
        if let Some(token) = credentials.token() {
            parameters.insert("token", token);
        }
    }
    parameters
}

/// MD5 over `body + channel_key`, hex encoded.
///
/// MD5 is what the gateway verifies; it is kept for wire compatibility.
pub fn sign(body: &str, channel_key: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(body.as_bytes());
    hasher.update(channel_key.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn build_signed_request(
    parameters: &Parameters,
    channel_key: &str,
) -> Result<SignedRequest, TransportError> {
    let body = serde_json::to_string(parameters)?;
    let signature = sign(&body, channel_key);
    Ok(SignedRequest { body, signature })
}
