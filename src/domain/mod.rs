//! Domain layer: parameter values, operation metadata, validation and the
//! error taxonomy (no I/O).

mod error;
mod request;
mod response;
mod validation;
mod value;

pub use error::{ErrorKind, GatewayError};
pub use request::{BatchQueryStatus, BatchSend, Operation, OperationSpec, QueryStatus, SendSms};
pub use response::{GatewayResponse, KnownRespCode, RespCode};
pub use validation::Validator;
pub use value::{Credentials, FieldKind, ParamValue, Parameters};
