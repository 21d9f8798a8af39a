//! Typed Rust client for the CAIH SMS gateway HTTP API.
//!
//! The crate is split into a domain layer (parameter values, operation
//! metadata, validation, error taxonomy), a transport layer for the wire
//! format (JSON body and MD5 signature), and a small client layer that
//! orchestrates requests.
//!
//! ```rust,no_run
//! use caih_sms::{GatewayClient, SendSms};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), caih_sms::GatewayError> {
//!     let client = GatewayClient::builder()
//!         .token("...")
//!         .channel_key("...")
//!         .build()?;
//!     let request = SendSms::new("8613800000000", "hello", "req-1");
//!     let response = client.send(request).await?;
//!     println!("respCode: {}", response.resp_code);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxFuture, DEFAULT_BASE_URL, GatewayClient, GatewayClientBuilder, HttpRequest, HttpResponse,
    HttpTransport, RequestClient,
};
pub use domain::{
    BatchQueryStatus, BatchSend, Credentials, ErrorKind, FieldKind, GatewayError,
    GatewayResponse, KnownRespCode, Operation, OperationSpec, ParamValue, Parameters,
    QueryStatus, RespCode, SendSms, Validator,
};
pub use transport::{
    SIGNATURE_HEADER, SignedRequest, TransportError, build_signed_request, insert_token, sign,
};
