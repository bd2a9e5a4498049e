use crate::assemble;
use crate::client::Transport;
use crate::input::{self, InputError, check_http_url, required_str};
use crate::mcp::contracts::{ROUTE_AI_IMAGE_DETECTION, TOOL_AI_IMAGE_DETECTION};
use crate::mcp::{errors, messages};
use crate::tools::{error_result, send_and_assemble};
use crate::types::{AiImageDetection, AiImageDetectionRequest};
use serde_json::Value;

pub fn call(args: &Value, transport: &dyn Transport) -> Value {
    if transport.is_credential_invalid() {
        return error_result(
            errors::INVALID_CREDENTIAL,
            messages::AI_IMAGE_CREDENTIAL,
            Some(TOOL_AI_IMAGE_DETECTION),
        );
    }

    let request = match parse_request(args) {
        Ok(request) => request,
        Err(err) => return error_result(err.kind, err.message, Some(TOOL_AI_IMAGE_DETECTION)),
    };

    send_and_assemble::<_, AiImageDetection>(
        transport,
        TOOL_AI_IMAGE_DETECTION,
        ROUTE_AI_IMAGE_DETECTION,
        &request,
        messages::AI_IMAGE_FAILED,
        assemble::image::assemble,
    )
}

fn parse_request(args: &Value) -> Result<AiImageDetectionRequest<'_>, InputError> {
    let obj = input::arguments(args)?;
    let url = required_str(obj, "url", messages::AI_IMAGE_URL_REQUIRED)?;
    check_http_url(url, messages::AI_IMAGE_URL_INVALID)?;
    Ok(AiImageDetectionRequest {
        url,
        version: "latest",
    })
}
