use super::TransportError;
use crate::domain::GatewayResponse;

pub fn decode_gateway_response(json: &str) -> Result<GatewayResponse, TransportError> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_pass_through_fields() {
        let json = r#"
        {
          "respCode": "00000",
          "respMsg": "ok",
          "messageId": "m-1",
          "batch": [{"toNumber": "123", "status": "DELIVERED"}]
        }
        "#;

        let resp = decode_gateway_response(json).unwrap();
        assert_eq!(resp.resp_code.as_str(), "00000");
        assert_eq!(resp.get("respMsg"), Some(&serde_json::json!("ok")));
        assert_eq!(resp.fields.len(), 3);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            decode_gateway_response("{ not json }"),
            Err(TransportError::Json(_))
        ));
        assert!(decode_gateway_response("[]").is_err());
    }
}
