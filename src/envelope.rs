//! Response envelope decoding and success/failure normalization
//!
//! Every Files API reply wraps its payload in a status envelope:
//!
//! ```json
//! { "response": { "code": "SUCCESS", "data": { ... }, "messages": [ ... ] } }
//! ```
//!
//! The service can return HTTP 200 with an application-level failure code in
//! the body, so transport success never implies operation success. The
//! normalizer checks both tiers.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Envelope code that marks a successful operation
pub const CODE_SUCCESS: &str = "SUCCESS";

/// The wrapper object every Files API reply is shaped as
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope {
    /// The status body
    pub response: EnvelopeBody,
}

/// Status code, payload and diagnostics carried by an envelope
#[derive(Clone, Debug, Deserialize)]
pub struct EnvelopeBody {
    /// Service status code; anything other than `SUCCESS` is a failure
    pub code: String,
    /// Operation payload, present and meaningful only on success
    #[serde(default)]
    pub data: Option<Value>,
    /// Error messages accompanying a failure code
    #[serde(default)]
    pub messages: Vec<String>,
}

impl EnvelopeBody {
    fn into_error(self) -> ClientError {
        ClientError::Api {
            code: self.code,
            messages: self.messages,
        }
    }
}

/// Shape an error for a non-200 reply: the embedded envelope if the body
/// carries one, otherwise the raw status and body.
pub(crate) fn status_error(status: u16, body: &[u8]) -> ClientError {
    match serde_json::from_slice::<Envelope>(body) {
        Ok(envelope) => envelope.response.into_error(),
        Err(_) => ClientError::Status {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        },
    }
}

/// Normalize a raw HTTP outcome into the operation's payload.
///
/// Returns the envelope's `data` on HTTP 200 + `SUCCESS`. Any other
/// combination is an error: the envelope itself when one parsed, the raw
/// status otherwise. A 200 body that is not an envelope at all is
/// [`ClientError::InvalidResponse`] rather than a silent success.
pub(crate) fn normalize(status: u16, body: &[u8]) -> Result<Option<Value>> {
    if status != 200 {
        return Err(status_error(status, body));
    }

    let envelope = serde_json::from_slice::<Envelope>(body)
        .map_err(|err| ClientError::InvalidResponse(format!("not a response envelope: {err}")))?;

    let reply = envelope.response;
    if reply.code == CODE_SUCCESS {
        Ok(reply.data)
    } else {
        Err(reply.into_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_resolves_with_data() {
        let body = json!({"response": {"code": "SUCCESS", "data": {"x": 1}}});
        let data = normalize(200, body.to_string().as_bytes()).unwrap();
        assert_eq!(data, Some(json!({"x": 1})));
    }

    #[test]
    fn success_without_data_resolves_empty() {
        let body = json!({"response": {"code": "SUCCESS"}});
        let data = normalize(200, body.to_string().as_bytes()).unwrap();
        assert_eq!(data, None);
    }

    #[test]
    fn failure_code_rejects_with_the_envelope() {
        let body = json!({
            "response": {"code": "VALIDATION_ERROR", "messages": ["bad locale"]}
        });
        let err = normalize(200, body.to_string().as_bytes()).unwrap_err();
        match err {
            ClientError::Api { code, messages } => {
                assert_eq!(code, "VALIDATION_ERROR");
                assert_eq!(messages, vec!["bad locale".to_string()]);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn non_200_with_envelope_rejects_with_the_envelope() {
        let body = json!({
            "response": {"code": "AUTHENTICATION_ERROR", "messages": ["bad key"]}
        });
        let err = normalize(401, body.to_string().as_bytes()).unwrap_err();
        assert_eq!(err.api_code(), Some("AUTHENTICATION_ERROR"));
    }

    #[test]
    fn non_200_without_envelope_carries_status_and_body() {
        let err = normalize(502, b"Bad Gateway").unwrap_err();
        match err {
            ClientError::Status { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "Bad Gateway");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[test]
    fn ok_status_with_junk_body_is_invalid_response() {
        let err = normalize(200, b"<html>not json</html>").unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }

    #[test]
    fn ok_status_with_json_but_no_code_is_invalid_response() {
        let body = json!({"response": {"data": {"x": 1}}});
        let err = normalize(200, body.to_string().as_bytes()).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }
}
