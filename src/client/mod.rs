//! Client layer: orchestrates validation, signing and transport calls.

mod request;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;

pub use request::{BoxFuture, HttpRequest, HttpResponse, HttpTransport, RequestClient};

use crate::domain::{Credentials, GatewayError, GatewayResponse, Operation, Parameters, Validator};
use request::ReqwestTransport;

/// Gateway host used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "http://sms.caihcom.com";

#[derive(Clone)]
/// Builder for [`GatewayClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent, or
/// the HTTP collaborator itself.
pub struct GatewayClientBuilder {
    base_url: String,
    credentials: Credentials,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl GatewayClientBuilder {
    /// Create a builder with the default base URL and no credentials.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            credentials: Credentials::default(),
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Override the gateway base URL; operation paths are appended to it.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.credentials.set_token(token);
        self
    }

    pub fn channel_key(mut self, channel_key: impl Into<String>) -> Self {
        self.credentials.set_channel_key(channel_key);
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom HTTP collaborator instead of the default reqwest client.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build a [`GatewayClient`].
    pub fn build(self) -> Result<GatewayClient, GatewayError> {
        url::Url::parse(&self.base_url)?;

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| GatewayError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport { client })
            }
        };

        Ok(GatewayClient {
            base_url: self.base_url.trim_end_matches('/').to_owned(),
            credentials: self.credentials,
            requests: RequestClient::new(http),
        })
    }
}

impl Default for GatewayClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
/// High-level gateway client.
///
/// Every operation runs the same pipeline: credential checks, field checks,
/// a signed `POST` to `{base_url}{operation path}`, JSON decoding, and the
/// `respCode` check. Validation failures return before anything is sent.
///
/// Credentials are plain configuration; set them before issuing calls.
pub struct GatewayClient {
    base_url: String,
    credentials: Credentials,
    requests: RequestClient,
}

impl GatewayClient {
    /// Create a client for the default gateway host, without credentials.
    ///
    /// For more customization, use [`GatewayClient::builder`].
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            credentials: Credentials::default(),
            requests: RequestClient::new(Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            })),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder() -> GatewayClientBuilder {
        GatewayClientBuilder::new()
    }

    /// Set the session token. Validation is deferred to call time.
    pub fn set_token(&mut self, token: impl Into<String>) -> &mut Self {
        self.credentials.set_token(token);
        self
    }

    /// Set the channel key. Validation is deferred to call time.
    pub fn set_channel_key(&mut self, channel_key: impl Into<String>) -> &mut Self {
        self.credentials.set_channel_key(channel_key);
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `operation`.
    pub fn endpoint(&self, operation: Operation) -> String {
        format!("{}{}", self.base_url, operation.path())
    }

    /// Send a single SMS (`sms/send`).
    pub async fn send(
        &self,
        parameters: impl Into<Parameters>,
    ) -> Result<GatewayResponse, GatewayError> {
        self.call(Operation::Send, parameters.into()).await
    }

    /// Query the delivery status of one message (`sms/queryStatus`).
    pub async fn query_status(
        &self,
        parameters: impl Into<Parameters>,
    ) -> Result<GatewayResponse, GatewayError> {
        self.call(Operation::QueryStatus, parameters.into()).await
    }

    /// Send messages in a batch (`sms/batchSend`).
    pub async fn batch_send(
        &self,
        parameters: impl Into<Parameters>,
    ) -> Result<GatewayResponse, GatewayError> {
        self.call(Operation::BatchSend, parameters.into()).await
    }

    /// Query the delivery status of a batch (`sms/batchQueryStatus`).
    pub async fn batch_query_status(
        &self,
        parameters: impl Into<Parameters>,
    ) -> Result<GatewayResponse, GatewayError> {
        self.call(Operation::BatchQueryStatus, parameters.into()).await
    }

    /// Run `operation` with caller-supplied parameters.
    ///
    /// Errors:
    /// - [`GatewayError::InvalidChannelKey`] / [`GatewayError::InvalidToken`] for missing credentials,
    /// - [`GatewayError::InvalidArgument`] for a missing or mistyped field,
    /// - [`GatewayError::Transport`] / [`GatewayError::Parse`] for network or JSON failures,
    /// - [`GatewayError::InvalidResponse`] when `respCode` is a known failure.
    pub async fn call(
        &self,
        operation: Operation,
        parameters: Parameters,
    ) -> Result<GatewayResponse, GatewayError> {
        Validator
            .validate_channel_key(&self.credentials)?
            .validate_token(&self.credentials)?
            .validate_operation(&parameters, operation.spec())?;

        let endpoint = self.endpoint(operation);
        let raw = self
            .requests
            .send_request(Method::POST, &endpoint, parameters, &self.credentials)
            .await?;

        let response = crate::transport::decode_gateway_response(&raw)
            .map_err(|err| GatewayError::Parse(Box::new(err)))?;

        Validator.validate_response(&response)?;
        Ok(response)
    }
}

impl Default for GatewayClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as StdError;
    use std::sync::Mutex;

    use crate::domain::{BatchQueryStatus, BatchSend, KnownRespCode, QueryStatus, SendSms};

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        calls: usize,
        last_request: Option<HttpRequest>,
        response_body: String,
    }

    impl FakeTransport {
        fn new(response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    calls: 0,
                    last_request: None,
                    response_body: response_body.into(),
                })),
            }
        }

        fn calls(&self) -> usize {
            self.state.lock().unwrap().calls
        }

        fn last_request(&self) -> HttpRequest {
            self.state
                .lock()
                .unwrap()
                .last_request
                .clone()
                .expect("no request was sent")
        }
    }

    impl HttpTransport for FakeTransport {
        fn send(
            &self,
            request: HttpRequest,
        ) -> BoxFuture<'_, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let body = {
                    let mut state = self.state.lock().unwrap();
                    state.calls += 1;
                    state.last_request = Some(request);
                    state.response_body.clone()
                };
                Ok(HttpResponse { status: 200, body })
            })
        }
    }

    fn make_client(transport: FakeTransport) -> GatewayClient {
        GatewayClient::builder()
            .base_url("https://example.invalid/")
            .token("T1")
            .channel_key("K1")
            .transport(Arc::new(transport))
            .build()
            .unwrap()
    }

    fn header<'a>(request: &'a HttpRequest, name: &str) -> Option<&'a str> {
        request
            .headers
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    #[tokio::test]
    async fn send_inserts_token_and_signs_body() {
        let transport = FakeTransport::new(r#"{"respCode":"00000","messageId":"m-1"}"#);
        let client = make_client(transport.clone());

        let params = Parameters::new()
            .with("toNumber", "123")
            .with("message", "hi")
            .with("requestId", "r1");
        let response = client.send(params).await.unwrap();
        assert_eq!(response.resp_code.as_str(), "00000");
        assert_eq!(response.get("messageId"), Some(&serde_json::json!("m-1")));

        let request = transport.last_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url, "https://example.invalid/sms/send");
        assert_eq!(
            request.body,
            r#"{"toNumber":"123","message":"hi","requestId":"r1","token":"T1"}"#
        );
        assert_eq!(
            header(&request, "md5Sum"),
            Some("39d7a0b17742edc73f3054cee4ba7141")
        );
        assert_eq!(header(&request, "Accept"), Some("application/json"));
        assert_eq!(header(&request, "Content-Type"), Some("application/json"));
    }

    #[tokio::test]
    async fn missing_required_field_sends_nothing() {
        let transport = FakeTransport::new(r#"{"respCode":"00000"}"#);
        let client = make_client(transport.clone());

        let params = Parameters::new()
            .with("toNumber", "123")
            .with("message", "hi");
        let err = client.send(params).await.unwrap_err();
        match err {
            GatewayError::InvalidArgument(message) => {
                assert_eq!(message, "requestId is required.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn query_status_rejects_numeric_message_id() {
        let transport = FakeTransport::new(r#"{"respCode":"00000"}"#);
        let client = make_client(transport.clone());

        let params = Parameters::new()
            .with("messageId", 123i64)
            .with("toNumber", "555");
        let err = client.query_status(params).await.unwrap_err();
        assert!(err.is_bad_request());
        assert_eq!(err.to_string(), "'messageId' must be string.");
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn query_status_maps_known_failure_code() {
        let transport = FakeTransport::new(r#"{"respCode":"02001"}"#);
        let client = make_client(transport.clone());

        let err = client
            .query_status(QueryStatus::new("m-1", "555"))
            .await
            .unwrap_err();
        match err {
            GatewayError::InvalidResponse { code, message } => {
                assert_eq!(code, KnownRespCode::NumberIsWrong.code());
                assert_eq!(message, "Number is Wrong");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.calls(), 1);
        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/sms/queryStatus"
        );
    }

    #[tokio::test]
    async fn unset_channel_key_fails_before_field_validation() {
        let transport = FakeTransport::new(r#"{"respCode":"00000"}"#);
        let mut client = GatewayClient::builder()
            .transport(Arc::new(transport.clone()))
            .build()
            .unwrap();
        client.set_token("T1");

        // empty parameters would fail field validation; credentials come first
        let err = client.send(Parameters::new()).await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidChannelKey(_)));
        assert_eq!(err.status(), Some(403));

        client.set_channel_key("");
        let err = client.batch_send(Parameters::new()).await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidChannelKey(_)));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn unset_token_fails_with_invalid_token() {
        let transport = FakeTransport::new(r#"{"respCode":"00000"}"#);
        let mut client = GatewayClient::builder()
            .transport(Arc::new(transport.clone()))
            .build()
            .unwrap();
        client.set_channel_key("K1");

        let err = client
            .query_status(QueryStatus::new("m-1", "555"))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidToken(_)));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn batch_operations_use_their_routes() {
        let transport = FakeTransport::new(r#"{"respCode":"00000","batch":[]}"#);
        let client = make_client(transport.clone());

        let request = BatchSend::new(
            "r1",
            vec!["123".to_owned(), "456".to_owned()],
            vec!["hi".to_owned(), "yo".to_owned()],
        );
        client.batch_send(request).await.unwrap();
        let sent = transport.last_request();
        assert_eq!(sent.url, "https://example.invalid/sms/batchSend");
        assert_eq!(
            sent.body,
            r#"{"requestId":"r1","batchToNumber":["123","456"],"batchMessage":["hi","yo"],"token":"T1"}"#
        );

        let request = BatchQueryStatus::new("r1", vec!["123".to_owned()], vec!["m-1".to_owned()]);
        client.batch_query_status(request).await.unwrap();
        assert_eq!(
            transport.last_request().url,
            "https://example.invalid/sms/batchQueryStatus"
        );
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn batch_send_requires_arrays() {
        let transport = FakeTransport::new(r#"{"respCode":"00000"}"#);
        let client = make_client(transport.clone());

        let params = Parameters::new()
            .with("requestId", "r1")
            .with("batchToNumber", "123")
            .with("batchMessage", vec!["hi"]);
        let err = client.batch_send(params).await.unwrap_err();
        assert_eq!(err.to_string(), "'batchToNumber' must be array.");
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn caller_token_is_not_overwritten() {
        let transport = FakeTransport::new(r#"{"respCode":"00000"}"#);
        let client = make_client(transport.clone());

        let params = Parameters::from(SendSms::new("123", "hi", "r1")).with("token", "override");
        client.send(params).await.unwrap();
        assert!(
            transport
                .last_request()
                .body
                .ends_with(r#""token":"override"}"#)
        );
    }

    #[tokio::test]
    async fn unknown_response_codes_are_returned() {
        let transport = FakeTransport::new(r#"{"respCode":"12345","detail":"queued"}"#);
        let client = make_client(transport);

        let response = client
            .send(SendSms::new("123", "hi", "r1"))
            .await
            .unwrap();
        assert_eq!(response.resp_code.as_str(), "12345");
        assert_eq!(response.get("detail"), Some(&serde_json::json!("queued")));
    }

    #[tokio::test]
    async fn invalid_json_maps_to_parse_error() {
        let transport = FakeTransport::new("<html>bad gateway</html>");
        let client = make_client(transport);

        let err = client
            .send(SendSms::new("123", "hi", "r1"))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Parse(_)));
    }

    #[test]
    fn setters_chain_and_do_not_validate() {
        let mut client = GatewayClient::new();
        client.set_token("").set_channel_key("K1");
        assert_eq!(client.credentials().token(), Some(""));
        assert_eq!(client.credentials().channel_key(), Some("K1"));
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(
            client.endpoint(Operation::Send),
            "http://sms.caihcom.com/sms/send"
        );
    }

    #[test]
    fn builder_validates_base_url() {
        let err = GatewayClient::builder()
            .base_url("not a url")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, GatewayError::InvalidBaseUrl(_)));

        let client = GatewayClient::builder()
            .base_url("https://example.invalid/")
            .timeout(Duration::from_secs(5))
            .user_agent("caih-sms-tests")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://example.invalid");
        assert_eq!(
            client.endpoint(Operation::BatchQueryStatus),
            "https://example.invalid/sms/batchQueryStatus"
        );
    }
}
