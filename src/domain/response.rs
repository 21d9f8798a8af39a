use std::fmt;

use serde::Deserialize;
use serde::de::{Error as DeError, Visitor};

/// Gateway `respCode`, kept as the string the gateway uses.
///
/// Integer codes are accepted and rendered zero-padded to five digits so that
/// `2001` and `"02001"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RespCode(String);

impl RespCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Map this code to a known failure, if it is one.
    pub fn known(&self) -> Option<KnownRespCode> {
        KnownRespCode::from_code(&self.0)
    }
}

impl fmt::Display for RespCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RespCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct RespCodeVisitor;

        impl Visitor<'_> for RespCodeVisitor {
            type Value = RespCode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("respCode as JSON string or integer")
            }

            fn visit_str<E: DeError>(self, value: &str) -> Result<RespCode, E> {
                Ok(RespCode(value.to_owned()))
            }

            fn visit_string<E: DeError>(self, value: String) -> Result<RespCode, E> {
                Ok(RespCode(value))
            }

            fn visit_i64<E: DeError>(self, value: i64) -> Result<RespCode, E> {
                Ok(RespCode(format!("{value:05}")))
            }

            fn visit_u64<E: DeError>(self, value: u64) -> Result<RespCode, E> {
                Ok(RespCode(format!("{value:05}")))
            }
        }

        deserializer.deserialize_any(RespCodeVisitor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Failure codes documented by the gateway.
///
/// Codes outside this set, success codes included, are not failures.
pub enum KnownRespCode {
    SystemInternalError,
    InvalidRequestParameter,
    UnauthorizedInformation,
    AccessFrequencyLimitExceeded,
    ApiCallException,
    NumberIsWrong,
    SendFailure,
    QueryFailure,
    SmsSendFailed,
}

impl KnownRespCode {
    pub const ALL: [Self; 9] = [
        Self::SystemInternalError,
        Self::InvalidRequestParameter,
        Self::UnauthorizedInformation,
        Self::AccessFrequencyLimitExceeded,
        Self::ApiCallException,
        Self::NumberIsWrong,
        Self::SendFailure,
        Self::QueryFailure,
        Self::SmsSendFailed,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "00001" => Self::SystemInternalError,
            "00002" => Self::InvalidRequestParameter,
            "00003" => Self::UnauthorizedInformation,
            "00004" => Self::AccessFrequencyLimitExceeded,
            "00005" => Self::ApiCallException,
            "02001" => Self::NumberIsWrong,
            "02002" => Self::SendFailure,
            "03001" => Self::QueryFailure,
            "99003" => Self::SmsSendFailed,
            _ => return None,
        })
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::SystemInternalError => "00001",
            Self::InvalidRequestParameter => "00002",
            Self::UnauthorizedInformation => "00003",
            Self::AccessFrequencyLimitExceeded => "00004",
            Self::ApiCallException => "00005",
            Self::NumberIsWrong => "02001",
            Self::SendFailure => "02002",
            Self::QueryFailure => "03001",
            Self::SmsSendFailed => "99003",
        }
    }

    /// Human-readable message reported for this code.
    pub fn message(self) -> &'static str {
        match self {
            Self::SystemInternalError => "System Internal Error",
            Self::InvalidRequestParameter => "Invalid Request Parameter",
            Self::UnauthorizedInformation => "Unauthorized Information",
            Self::AccessFrequencyLimitExceeded => "The API Exceeds the Access Frequency Limit",
            Self::ApiCallException => "The API Call Returns an Exception",
            Self::NumberIsWrong => "Number is Wrong",
            Self::SendFailure => "Send Failure",
            Self::QueryFailure => "Query Failure",
            Self::SmsSendFailed => "SMS Send Failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Decoded gateway response.
///
/// Only `respCode` is interpreted; every other field is passed through.
pub struct GatewayResponse {
    #[serde(rename = "respCode")]
    pub resp_code: RespCode,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl GatewayResponse {
    /// Look up a pass-through field.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.fields.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_table() {
        for known in KnownRespCode::ALL {
            assert_eq!(KnownRespCode::from_code(known.code()), Some(known));
            assert!(!known.message().is_empty());
        }
        assert_eq!(KnownRespCode::from_code("00000"), None);
    }

    #[test]
    fn resp_code_accepts_string_or_integer() {
        let resp: GatewayResponse =
            serde_json::from_str(r#"{"respCode":"02001","messageId":"m1"}"#).unwrap();
        assert_eq!(resp.resp_code.as_str(), "02001");
        assert_eq!(resp.resp_code.known(), Some(KnownRespCode::NumberIsWrong));
        assert_eq!(resp.get("messageId"), Some(&serde_json::json!("m1")));
        assert!(resp.get("respCode").is_none());

        let resp: GatewayResponse = serde_json::from_str(r#"{"respCode":2001}"#).unwrap();
        assert_eq!(resp.resp_code, RespCode::new("02001"));

        let resp: GatewayResponse = serde_json::from_str(r#"{"respCode":0}"#).unwrap();
        assert_eq!(resp.resp_code.as_str(), "00000");
        assert_eq!(resp.resp_code.known(), None);
    }

    #[test]
    fn resp_code_is_required() {
        assert!(serde_json::from_str::<GatewayResponse>(r#"{"messageId":"m1"}"#).is_err());
        assert!(serde_json::from_str::<GatewayResponse>(r#"{"respCode":null}"#).is_err());
    }
}
