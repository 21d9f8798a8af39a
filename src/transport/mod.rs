//! Transport layer: wire-format details (JSON body, signature, response decoding).

mod response;
mod signer;

pub use response::decode_gateway_response;
pub use signer::{SIGNATURE_HEADER, SignedRequest, build_signed_request, insert_token, sign};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
