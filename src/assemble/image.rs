use super::{FULL_RESPONSE_SEPARATOR, Response, format_number, pretty_json, probability_percent};
use crate::types::AiImageDetection;

pub fn assemble(response: &Response<AiImageDetection>) -> String {
    let Some((parsed, human_probability)) =
        response.success_with(|parsed| parsed.human_probability)
    else {
        return pretty_json(response.raw());
    };

    let human = probability_percent(human_probability);
    let ai = probability_percent(parsed.ai_probability);

    let mut output = format!(
        "The AI detector Winston AI has detected the image as {}% human. Which means that the image is {}% likely to be AI generated.",
        format_number(human),
        format_number(ai),
    );
    output.push_str(FULL_RESPONSE_SEPARATOR);
    output.push_str(&pretty_json(response.raw()));
    output
}
