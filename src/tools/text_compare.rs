use crate::assemble;
use crate::client::Transport;
use crate::input::{self, InputError, check_max_length, required_str};
use crate::mcp::contracts::{ROUTE_TEXT_COMPARE, TEXT_COMPARE_MAX_CHARS, TOOL_TEXT_COMPARE};
use crate::mcp::{errors, messages};
use crate::tools::{error_result, send_and_assemble};
use crate::types::{TextCompare, TextCompareRequest};
use serde_json::Value;

pub fn call(args: &Value, transport: &dyn Transport) -> Value {
    if transport.is_credential_invalid() {
        return error_result(
            errors::INVALID_CREDENTIAL,
            messages::TEXT_COMPARE_CREDENTIAL,
            Some(TOOL_TEXT_COMPARE),
        );
    }

    let request = match parse_request(args) {
        Ok(request) => request,
        Err(err) => return error_result(err.kind, err.message, Some(TOOL_TEXT_COMPARE)),
    };

    send_and_assemble::<_, TextCompare>(
        transport,
        TOOL_TEXT_COMPARE,
        ROUTE_TEXT_COMPARE,
        &request,
        messages::TEXT_COMPARE_FAILED,
        assemble::compare::assemble,
    )
}

fn parse_request(args: &Value) -> Result<TextCompareRequest<'_>, InputError> {
    let obj = input::arguments(args)?;
    let first_text = required_str(obj, "first_text", messages::TEXT_COMPARE_FIRST_REQUIRED)?;
    let second_text = required_str(obj, "second_text", messages::TEXT_COMPARE_SECOND_REQUIRED)?;
    check_max_length(first_text, TEXT_COMPARE_MAX_CHARS, messages::TEXT_COMPARE_TOO_LONG)?;
    check_max_length(second_text, TEXT_COMPARE_MAX_CHARS, messages::TEXT_COMPARE_TOO_LONG)?;
    Ok(TextCompareRequest {
        first_text,
        second_text,
    })
}
