use crate::assemble;
use crate::client::Transport;
use crate::input::{self, InputError, check_length, optional_str, required_str};
use crate::mcp::contracts::{
    AI_TEXT_MAX_CHARS, AI_TEXT_MIN_CHARS, ROUTE_AI_TEXT_DETECTION, TOOL_AI_TEXT_DETECTION,
};
use crate::mcp::{errors, messages};
use crate::tools::{error_result, send_and_assemble};
use crate::types::{AiTextDetection, AiTextDetectionRequest};
use serde_json::Value;

pub fn call(args: &Value, transport: &dyn Transport) -> Value {
    if transport.is_credential_invalid() {
        return error_result(
            errors::INVALID_CREDENTIAL,
            messages::AI_TEXT_CREDENTIAL,
            Some(TOOL_AI_TEXT_DETECTION),
        );
    }

    let request = match parse_request(args) {
        Ok(request) => request,
        Err(err) => return error_result(err.kind, err.message, Some(TOOL_AI_TEXT_DETECTION)),
    };

    send_and_assemble::<_, AiTextDetection>(
        transport,
        TOOL_AI_TEXT_DETECTION,
        ROUTE_AI_TEXT_DETECTION,
        &request,
        messages::AI_TEXT_FAILED,
        assemble::text::assemble,
    )
}

fn parse_request(args: &Value) -> Result<AiTextDetectionRequest<'_>, InputError> {
    let obj = input::arguments(args)?;
    let text = required_str(obj, "text", messages::AI_TEXT_REQUIRED)?;
    check_length(
        text,
        AI_TEXT_MIN_CHARS,
        AI_TEXT_MAX_CHARS,
        messages::AI_TEXT_TOO_SHORT,
        messages::AI_TEXT_TOO_LONG,
    )?;

    Ok(AiTextDetectionRequest {
        text,
        file: optional_str(obj, "file")?,
        website: optional_str(obj, "website")?,
        sentences: true,
        version: "latest",
        language: "auto",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::stub::StubTransport;
    use serde_json::json;

    fn long_text() -> String {
        "The quick brown fox jumps over the lazy dog. ".repeat(10)
    }

    #[test]
    fn invalid_credential_short_circuits() {
        let transport = StubTransport::without_credential();
        let result = call(&json!({"text": long_text()}), &transport);
        assert_eq!(result["isError"], true);
        assert_eq!(result["content"][0]["text"], messages::AI_TEXT_CREDENTIAL);
        assert_eq!(result["structuredContent"]["error"]["kind"], errors::INVALID_CREDENTIAL);
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn missing_text_is_rejected_before_sending() {
        let transport = StubTransport::failing();
        let result = call(&json!({}), &transport);
        assert_eq!(result["content"][0]["text"], messages::AI_TEXT_REQUIRED);
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn short_text_is_rejected() {
        let transport = StubTransport::failing();
        let result = call(&json!({"text": "too short"}), &transport);
        assert_eq!(result["content"][0]["text"], messages::AI_TEXT_TOO_SHORT);
    }

    #[test]
    fn sends_fixed_options_and_renders() {
        let transport = StubTransport::replying(json!({
            "score": 65,
            "sentences": [{"text": "Whales are large.", "score": 12}]
        }));
        let text = long_text();
        let result = call(&json!({"text": text, "website": "https://example.com"}), &transport);

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "/v2/ai-content-detection");
        assert_eq!(
            sent[0].1,
            json!({
                "text": text,
                "website": "https://example.com",
                "sentences": true,
                "version": "latest",
                "language": "auto"
            })
        );

        assert_eq!(result["isError"], false);
        let rendered = result["content"][0]["text"].as_str().expect("text");
        assert!(rendered.contains("65% human-written"));
        assert!(rendered.contains(r#""""Whales are large.""" with a score of 12%"#));
        assert_eq!(result["structuredContent"]["response"]["score"], 65);
    }

    #[test]
    fn upstream_error_payload_is_echoed_not_flagged() {
        let transport = StubTransport::replying(json!({"error": "not enough credits"}));
        let result = call(&json!({"text": long_text()}), &transport);
        assert_eq!(result["isError"], false);
        assert!(
            result["content"][0]["text"]
                .as_str()
                .expect("text")
                .contains("\"error\": \"not enough credits\"")
        );
    }

    #[test]
    fn transport_failure_uses_fixed_message() {
        let transport = StubTransport::failing();
        let result = call(&json!({"text": long_text()}), &transport);
        assert_eq!(result["isError"], true);
        assert_eq!(result["content"][0]["text"], messages::AI_TEXT_FAILED);
        assert_eq!(result["structuredContent"]["error"]["kind"], errors::UPSTREAM_FAILED);
    }
}
