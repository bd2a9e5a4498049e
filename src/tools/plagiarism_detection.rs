use crate::assemble;
use crate::client::Transport;
use crate::input::{self, InputError, check_length, optional_str, required_str};
use crate::mcp::contracts::{
    DEFAULT_PLAGIARISM_COUNTRY, DEFAULT_PLAGIARISM_LANGUAGE, PLAGIARISM_MAX_CHARS,
    PLAGIARISM_MIN_CHARS, ROUTE_PLAGIARISM_DETECTION, TOOL_PLAGIARISM_DETECTION,
};
use crate::mcp::{errors, messages};
use crate::tools::{error_result, send_and_assemble};
use crate::types::{PlagiarismDetection, PlagiarismRequest};
use serde_json::Value;

pub fn call(args: &Value, transport: &dyn Transport) -> Value {
    if transport.is_credential_invalid() {
        return error_result(
            errors::INVALID_CREDENTIAL,
            messages::PLAGIARISM_CREDENTIAL,
            Some(TOOL_PLAGIARISM_DETECTION),
        );
    }

    let request = match parse_request(args) {
        Ok(request) => request,
        Err(err) => return error_result(err.kind, err.message, Some(TOOL_PLAGIARISM_DETECTION)),
    };

    send_and_assemble::<_, PlagiarismDetection>(
        transport,
        TOOL_PLAGIARISM_DETECTION,
        ROUTE_PLAGIARISM_DETECTION,
        &request,
        messages::PLAGIARISM_FAILED,
        assemble::plagiarism::assemble,
    )
}

fn parse_request(args: &Value) -> Result<PlagiarismRequest<'_>, InputError> {
    let obj = input::arguments(args)?;
    let text = required_str(obj, "text", messages::PLAGIARISM_TEXT_REQUIRED)?;
    check_length(
        text,
        PLAGIARISM_MIN_CHARS,
        PLAGIARISM_MAX_CHARS,
        messages::PLAGIARISM_TEXT_TOO_SHORT,
        messages::PLAGIARISM_TEXT_TOO_LONG,
    )?;

    let language = optional_str(obj, "language")?
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_PLAGIARISM_LANGUAGE);
    let country = optional_str(obj, "country")?
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_PLAGIARISM_COUNTRY);

    Ok(PlagiarismRequest {
        text,
        language,
        country,
    })
}
