use serde_json::json;

pub mod contracts;
pub mod errors;
pub mod messages;

pub const SERVER_INSTRUCTIONS: &str = "Winston AI tools: detect AI-generated text and images, detect plagiarism, and compare two texts.";

pub fn tool_definitions() -> Vec<serde_json::Value> {
    vec![
        json!({
            "name": contracts::TOOL_AI_TEXT_DETECTION,
            "title": "AI Text Detection",
            "description": "Detects AI content in a given text to detect the likelihood of the text being written by an AI. Costs 1 credit per word.",
            "inputSchema": contracts::ai_text_detection_schema(),
            "annotations": { "readOnlyHint": true, "openWorldHint": true }
        }),
        json!({
            "name": contracts::TOOL_AI_IMAGE_DETECTION,
            "title": "AI Image Detection",
            "description": "Detects AI content in a given image by verifying image metadata and using a machine learning system trained to differentiate between human and AI-generated images. Costs 300 credits per image.",
            "inputSchema": contracts::ai_image_detection_schema(),
            "annotations": { "readOnlyHint": true, "openWorldHint": true }
        }),
        json!({
            "name": contracts::TOOL_PLAGIARISM_DETECTION,
            "title": "Plagiarism Detection",
            "description": "Checks text for plagiarism by comparing it with similar content found across the internet. Costs 2 credits per word.",
            "inputSchema": contracts::plagiarism_detection_schema(),
            "annotations": { "readOnlyHint": true, "openWorldHint": true }
        }),
        json!({
            "name": contracts::TOOL_TEXT_COMPARE,
            "title": "Text Compare",
            "description": "Compares two texts and returns the similarity score. Costs 1/2 credit per total words found in both texts.",
            "inputSchema": contracts::text_compare_schema(),
            "annotations": { "readOnlyHint": true, "openWorldHint": true }
        }),
    ]
}
