use crate::domain::value::{FieldKind, Parameters};

/// Static metadata for one gateway operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSpec {
    /// Fields that must be present, checked in this order.
    pub required_fields: &'static [&'static str],
    /// Declared kinds of fields, checked in this order when present.
    pub field_types: &'static [(&'static str, FieldKind)],
}

const SEND_SPEC: OperationSpec = OperationSpec {
    required_fields: &["toNumber", "message", "requestId"],
    field_types: &[
        ("toNumber", FieldKind::String),
        ("message", FieldKind::String),
        ("requestId", FieldKind::String),
        ("sendType", FieldKind::String),
        ("from", FieldKind::String),
    ],
};

const QUERY_STATUS_SPEC: OperationSpec = OperationSpec {
    required_fields: &["messageId", "toNumber"],
    field_types: &[
        ("messageId", FieldKind::String),
        ("toNumber", FieldKind::String),
    ],
};

const BATCH_SEND_SPEC: OperationSpec = OperationSpec {
    required_fields: &["requestId", "batchToNumber", "batchMessage"],
    field_types: &[
        ("requestId", FieldKind::String),
        ("batchToNumber", FieldKind::Array),
        ("batchMessage", FieldKind::Array),
    ],
};

const BATCH_QUERY_STATUS_SPEC: OperationSpec = OperationSpec {
    required_fields: &["requestId", "batchToNumber", "batchMessageId"],
    field_types: &[
        ("requestId", FieldKind::String),
        ("batchToNumber", FieldKind::Array),
        ("batchMessageId", FieldKind::Array),
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Gateway operations supported by [`crate::GatewayClient`].
pub enum Operation {
    Send,
    QueryStatus,
    BatchSend,
    BatchQueryStatus,
}

impl Operation {
    /// Path appended to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::Send => "/sms/send",
            Self::QueryStatus => "/sms/queryStatus",
            Self::BatchSend => "/sms/batchSend",
            Self::BatchQueryStatus => "/sms/batchQueryStatus",
        }
    }

    pub fn spec(self) -> &'static OperationSpec {
        match self {
            Self::Send => &SEND_SPEC,
            Self::QueryStatus => &QUERY_STATUS_SPEC,
            Self::BatchSend => &BATCH_SEND_SPEC,
            Self::BatchQueryStatus => &BATCH_QUERY_STATUS_SPEC,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Typed parameters for `sms/send`.
pub struct SendSms {
    pub to_number: String,
    pub message: String,
    pub request_id: String,
    pub send_type: Option<String>,
    pub from: Option<String>,
}

impl SendSms {
    pub fn new(
        to_number: impl Into<String>,
        message: impl Into<String>,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            to_number: to_number.into(),
            message: message.into(),
            request_id: request_id.into(),
            send_type: None,
            from: None,
        }
    }

    pub fn send_type(mut self, send_type: impl Into<String>) -> Self {
        self.send_type = Some(send_type.into());
        self
    }

    /// Sender id shown to the recipient (`from`).
    pub fn sender(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }
}

impl From<SendSms> for Parameters {
    fn from(request: SendSms) -> Self {
        let mut params = Parameters::new()
            .with("toNumber", request.to_number)
            .with("message", request.message)
            .with("requestId", request.request_id);
        if let Some(send_type) = request.send_type {
            params.insert("sendType", send_type);
        }
        if let Some(from) = request.from {
            params.insert("from", from);
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Typed parameters for `sms/queryStatus`.
pub struct QueryStatus {
    pub message_id: String,
    pub to_number: String,
}

impl QueryStatus {
    pub fn new(message_id: impl Into<String>, to_number: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            to_number: to_number.into(),
        }
    }
}

impl From<QueryStatus> for Parameters {
    fn from(request: QueryStatus) -> Self {
        Parameters::new()
            .with("messageId", request.message_id)
            .with("toNumber", request.to_number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Typed parameters for `sms/batchSend`.
///
/// `batch_message[i]` is delivered to `batch_to_number[i]`.
pub struct BatchSend {
    pub request_id: String,
    pub batch_to_number: Vec<String>,
    pub batch_message: Vec<String>,
}

impl BatchSend {
    pub fn new(
        request_id: impl Into<String>,
        batch_to_number: Vec<String>,
        batch_message: Vec<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            batch_to_number,
            batch_message,
        }
    }
}

impl From<BatchSend> for Parameters {
    fn from(request: BatchSend) -> Self {
        Parameters::new()
            .with("requestId", request.request_id)
            .with("batchToNumber", request.batch_to_number)
            .with("batchMessage", request.batch_message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Typed parameters for `sms/batchQueryStatus`.
pub struct BatchQueryStatus {
    pub request_id: String,
    pub batch_to_number: Vec<String>,
    pub batch_message_id: Vec<String>,
}

impl BatchQueryStatus {
    pub fn new(
        request_id: impl Into<String>,
        batch_to_number: Vec<String>,
        batch_message_id: Vec<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            batch_to_number,
            batch_message_id,
        }
    }
}

impl From<BatchQueryStatus> for Parameters {
    fn from(request: BatchQueryStatus) -> Self {
        Parameters::new()
            .with("requestId", request.request_id)
            .with("batchToNumber", request.batch_to_number)
            .with("batchMessageId", request.batch_message_id)
    }
}
