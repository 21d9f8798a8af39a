use crate::domain::error::{ErrorKind, GatewayError};
use crate::domain::request::OperationSpec;
use crate::domain::response::GatewayResponse;
use crate::domain::value::{Credentials, FieldKind, Parameters};

/// Stateless checks that chain through `?`.
///
/// Each check returns the validator back on success, so a pipeline stops at
/// the first failing step:
///
/// ```rust
/// use caih_sms::{Credentials, Operation, Parameters, Validator};
///
/// let creds = Credentials::new("T1", "K1");
/// let params = Parameters::new()
///     .with("messageId", "m1")
///     .with("toNumber", "555");
/// let spec = Operation::QueryStatus.spec();
///
/// Validator
///     .validate_channel_key(&creds)?
///     .validate_token(&creds)?
///     .validate_requirement(&params, spec.required_fields)?
///     .validate_type(&params, spec.field_types)?;
/// # Ok::<(), caih_sms::GatewayError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator;

impl Validator {
    /// Fails with [`GatewayError::InvalidChannelKey`] when the channel key is unset or empty.
    pub fn validate_channel_key(self, credentials: &Credentials) -> Result<Self, GatewayError> {
        match credentials.channel_key() {
            Some(key) if !key.is_empty() => Ok(self),
            _ => Err(GatewayError::new(
                ErrorKind::InvalidChannelKey,
                "Channel Key is Invalid.",
            )),
        }
    }

    /// Fails with [`GatewayError::InvalidToken`] when the token is unset or empty.
    pub fn validate_token(self, credentials: &Credentials) -> Result<Self, GatewayError> {
        match credentials.token() {
            Some(token) if !token.is_empty() => Ok(self),
            _ => Err(GatewayError::new(
                ErrorKind::InvalidToken,
                "Token is Invalid.",
            )),
        }
    }

    /// Fails on the first field of `required` that `parameters` lacks.
    pub fn validate_requirement(
        self,
        parameters: &Parameters,
        required: &[&str],
    ) -> Result<Self, GatewayError> {
        match required.iter().find(|field| !parameters.contains_key(field)) {
            Some(field) => Err(GatewayError::new(
                ErrorKind::InvalidArgument,
                format!("{field} is required."),
            )),
            None => Ok(self),
        }
    }

    /// Fails on the first present field whose value disagrees with its declared kind.
    ///
    /// Absent fields are skipped.
    pub fn validate_type(
        self,
        parameters: &Parameters,
        field_types: &[(&str, FieldKind)],
    ) -> Result<Self, GatewayError> {
        for (field, kind) in field_types {
            if let Some(value) = parameters.get(field) {
                if !kind.accepts(value) {
                    return Err(GatewayError::new(
                        ErrorKind::InvalidArgument,
                        format!("'{field}' must be {kind}."),
                    ));
                }
            }
        }
        Ok(self)
    }

    /// Runs [`Validator::validate_requirement`] then [`Validator::validate_type`] for an operation.
    pub fn validate_operation(
        self,
        parameters: &Parameters,
        spec: &OperationSpec,
    ) -> Result<Self, GatewayError> {
        self.validate_requirement(parameters, spec.required_fields)?
            .validate_type(parameters, spec.field_types)
    }

    /// Fails with [`GatewayError::InvalidResponse`] when `respCode` is a known failure.
    ///
    /// Any other code, including success codes, passes.
    pub fn validate_response(self, response: &GatewayResponse) -> Result<Self, GatewayError> {
        match response.resp_code.known() {
            Some(known) => Err(GatewayError::invalid_response(
                known.code(),
                known.message(),
            )),
            None => Ok(self),
        }
    }
}
