use serde_json::json;

pub const TOOL_AI_TEXT_DETECTION: &str = "ai-text-detection";
pub const TOOL_AI_IMAGE_DETECTION: &str = "ai-image-detection";
pub const TOOL_PLAGIARISM_DETECTION: &str = "plagiarism-detection";
pub const TOOL_TEXT_COMPARE: &str = "text-compare";

pub const ROUTE_AI_TEXT_DETECTION: &str = "/v2/ai-content-detection";
pub const ROUTE_AI_IMAGE_DETECTION: &str = "/v2/image-detection";
pub const ROUTE_PLAGIARISM_DETECTION: &str = "/v2/plagiarism";
pub const ROUTE_TEXT_COMPARE: &str = "/v2/text-compare";

pub const AI_TEXT_MIN_CHARS: usize = 300;
pub const AI_TEXT_MAX_CHARS: usize = 150_000;
pub const PLAGIARISM_MIN_CHARS: usize = 100;
pub const PLAGIARISM_MAX_CHARS: usize = 120_000;
pub const TEXT_COMPARE_MAX_CHARS: usize = 120_000;

pub const DEFAULT_PLAGIARISM_LANGUAGE: &str = "en";
pub const DEFAULT_PLAGIARISM_COUNTRY: &str = "us";

pub fn ai_text_detection_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "text": {
                "type": "string",
                "minLength": AI_TEXT_MIN_CHARS,
                "maxLength": AI_TEXT_MAX_CHARS,
                "description": "The text to scan. Texts under 600 characters may produce unreliable results and should be avoided. Maximum 150 000 characters per request."
            },
            "file": {
                "type": "string",
                "description": "A file to scan (.pdf, .doc or .docx). The file has priority over the text."
            },
            "website": {
                "type": "string",
                "description": "A publicly accessible website URL to scan. The website has priority over the text and the file."
            }
        },
        "required": ["text"],
        "additionalProperties": false
    })
}

pub fn ai_image_detection_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "url": {
                "type": "string",
                "format": "uri",
                "description": "URL of the image to scan. Must be publicly accessible and point to a JPG, JPEG, PNG or WEBP image of at least 256x256 pixels."
            }
        },
        "required": ["url"],
        "additionalProperties": false
    })
}

pub fn plagiarism_detection_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "text": {
                "type": "string",
                "minLength": PLAGIARISM_MIN_CHARS,
                "maxLength": PLAGIARISM_MAX_CHARS,
                "description": "The text to be scanned. Between 100 and 120,000 characters."
            },
            "language": {
                "type": "string",
                "default": DEFAULT_PLAGIARISM_LANGUAGE,
                "description": "2 letter language code. We accept all languages."
            },
            "country": {
                "type": "string",
                "default": DEFAULT_PLAGIARISM_COUNTRY,
                "description": "The country code of the country where the text was written."
            }
        },
        "required": ["text"],
        "additionalProperties": false
    })
}

pub fn text_compare_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "first_text": {
                "type": "string",
                "maxLength": TEXT_COMPARE_MAX_CHARS,
                "description": "The first text to compare. Maximum 120,000 characters."
            },
            "second_text": {
                "type": "string",
                "maxLength": TEXT_COMPARE_MAX_CHARS,
                "description": "The second text to compare against the first text. Maximum 120,000 characters."
            }
        },
        "required": ["first_text", "second_text"],
        "additionalProperties": false
    })
}
