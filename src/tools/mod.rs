use crate::assemble::{Detection, Response};
use crate::client::Transport;
use crate::mcp::errors;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::warn;

pub mod ai_image_detection;
pub mod ai_text_detection;
pub mod plagiarism_detection;
pub mod text_compare;

pub fn error_result(
    kind: &'static str,
    message: impl Into<String>,
    source: Option<&str>,
) -> serde_json::Value {
    let message = message.into();
    let mut error = json!({
        "kind": kind,
        "message": message,
    });

    if let Some(source) = source
        && let Some(obj) = error.as_object_mut()
    {
        obj.insert("source".to_string(), json!(source));
    }

    json!({
        "content": [{"type": "text", "text": message}],
        "structuredContent": {"error": error},
        "isError": true
    })
}

fn text_result(text: String, raw: &Value) -> serde_json::Value {
    json!({
        "content": [{"type": "text", "text": text}],
        "structuredContent": {"response": raw},
        "isError": false
    })
}

/// Serialize `request`, send it, and render whatever comes back. Transport
/// failures collapse into the tool's fixed `failed` message.
fn send_and_assemble<B, T>(
    transport: &dyn Transport,
    tool: &str,
    route: &str,
    request: &B,
    failed: &str,
    render: impl Fn(&Response<T>) -> String,
) -> serde_json::Value
where
    B: Serialize,
    T: DeserializeOwned,
{
    let body = match serde_json::to_string(request) {
        Ok(body) => body,
        Err(err) => {
            return error_result(
                errors::INTERNAL_ERROR,
                format!("failed to serialize request: {err}"),
                Some(tool),
            );
        }
    };

    let raw = match transport.send(route, body) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(tool, route, error = %err, "winston request failed");
            return error_result(errors::UPSTREAM_FAILED, failed, Some(tool));
        }
    };

    let response = Response::<T>::from_value(raw);
    match response.detection() {
        Detection::Error(err) => warn!(tool, error = %err.error, "winston reported an error"),
        Detection::Unrecognized => warn!(tool, "unrecognized winston response"),
        Detection::Success(_) => {}
    }

    text_result(render(&response), response.raw())
}

#[cfg(test)]
pub(crate) mod stub {
    use crate::client::{Transport, TransportError};
    use serde_json::Value;
    use std::cell::RefCell;

    /// Records every request and answers with a canned body, or a 502 when
    /// there is none.
    pub struct StubTransport {
        credential_invalid: bool,
        reply: Option<Value>,
        pub sent: RefCell<Vec<(String, Value)>>,
    }

    impl StubTransport {
        pub fn replying(reply: Value) -> Self {
            Self {
                credential_invalid: false,
                reply: Some(reply),
                sent: RefCell::new(Vec::new()),
            }
        }

        pub fn failing() -> Self {
            Self {
                credential_invalid: false,
                reply: None,
                sent: RefCell::new(Vec::new()),
            }
        }

        pub fn without_credential() -> Self {
            Self {
                credential_invalid: true,
                ..Self::failing()
            }
        }
    }

    impl Transport for StubTransport {
        fn is_credential_invalid(&self) -> bool {
            self.credential_invalid
        }

        fn send(&self, route: &str, body: String) -> Result<Value, TransportError> {
            let body: Value =
                serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))?;
            self.sent.borrow_mut().push((route.to_string(), body));
            match &self.reply {
                Some(reply) => Ok(reply.clone()),
                None => Err(TransportError::Status {
                    status: 502,
                    body: "bad gateway".to_string(),
                }),
            }
        }
    }
}
