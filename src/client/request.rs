use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use reqwest::Method;

use crate::domain::{Credentials, GatewayError, Parameters, Validator};
use crate::transport::{SIGNATURE_HEADER, build_signed_request, insert_token};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Outgoing HTTP request handed to an [`HttpTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// HTTP collaborator performing the actual network call.
///
/// Timeouts, proxies and TLS belong to the implementation.
pub trait HttpTransport: Send + Sync {
    fn send(
        &self,
        request: HttpRequest,
    ) -> BoxFuture<'_, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
pub(crate) struct ReqwestTransport {
    pub(crate) client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> BoxFuture<'_, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = self.client.request(request.method, &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(*name, value);
            }
            let response = builder.body(request.body).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

/// Signs requests and hands them to the HTTP collaborator.
#[derive(Clone)]
pub struct RequestClient {
    http: Arc<dyn HttpTransport>,
}

impl RequestClient {
    pub fn new(http: Arc<dyn HttpTransport>) -> Self {
        Self { http }
    }

    /// Validate credentials, insert the token, sign, and send.
    ///
    /// Returns the raw response body. The HTTP status is not interpreted; the
    /// gateway reports outcomes through `respCode`.
    pub async fn send_request(
        &self,
        method: Method,
        endpoint: &str,
        parameters: Parameters,
        credentials: &Credentials,
    ) -> Result<String, GatewayError> {
        Validator
            .validate_channel_key(credentials)?
            .validate_token(credentials)?;

        let parameters = insert_token(parameters, credentials);
        // non-empty: checked above
        let channel_key = credentials.channel_key().unwrap_or_default();
        let signed = build_signed_request(&parameters, channel_key)
            .map_err(|err| GatewayError::Encode(Box::new(err)))?;

        tracing::debug!(
            %method,
            endpoint,
            signature = %signed.signature,
            "sending gateway request"
        );

        let request = HttpRequest {
            method,
            url: endpoint.to_owned(),
            headers: vec![
                ("Accept", "application/json".to_owned()),
                ("Content-Type", "application/json".to_owned()),
                (SIGNATURE_HEADER, signed.signature),
            ],
            body: signed.body,
        };

        let response = self
            .http
            .send(request)
            .await
            .map_err(GatewayError::Transport)?;

        tracing::debug!(
            endpoint,
            status = response.status,
            bytes = response.body.len(),
            "gateway responded"
        );

        Ok(response.body)
    }
}
