use super::{
    FULL_RESPONSE_SEPARATOR, Response, TOP_SENTENCES, format_number, pretty_json, top_by_score,
};
use crate::types::AiTextDetection;

pub fn assemble(response: &Response<AiTextDetection>) -> String {
    let Some((parsed, human_score)) = response.success_with(|parsed| parsed.score) else {
        return pretty_json(response.raw());
    };

    let ai_score = 100.0 - human_score;

    let mut output = format!(
        "The AI detector Winston AI has detected the text as {}% human-written. Which means that the text is {}% likely to be written by an AI.",
        format_number(human_score),
        format_number(ai_score),
    );

    let sentences: Vec<String> = top_by_score(&parsed.sentences, TOP_SENTENCES, |s| s.score)
        .into_iter()
        .map(|sentence| {
            format!(
                r#""""{}""" with a score of {}%"#,
                sentence.text,
                format_number(sentence.score)
            )
        })
        .collect();

    if !sentences.is_empty() {
        output.push_str(&format!(
            " The sentences most likely written by an AI are {}.",
            sentences.join(", ")
        ));
    }

    output.push_str(FULL_RESPONSE_SEPARATOR);
    output.push_str(&pretty_json(response.raw()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    const SAMPLE: &str = "Whales are some of the largest and most fascinating creatures on Earth. Belonging to the order Cetacea, these majestic marine mammals inhabit oceans all around the world.";

    fn valid_response() -> Value {
        json!({
            "status": 200,
            "length": 1223,
            "score": 65,
            "sentences": [
                { "length": 172, "score": 0.65, "text": SAMPLE }
            ],
            "input": "text",
            "readability_score": 55.61,
            "credits_used": 195,
            "credits_remaining": 99999805,
            "version": "4.8",
            "language": "es"
        })
    }

    fn render(value: Value) -> String {
        assemble(&Response::from_value(value))
    }

    #[test]
    fn error_payload_is_echoed() {
        let output = render(json!({
            "error": "There was an error while detecting the AI content in the text."
        }));
        assert!(output.contains(
            "\"error\": \"There was an error while detecting the AI content in the text.\""
        ));
        assert!(!output.contains("Winston AI has detected"));
    }

    #[test]
    fn valid_response_explains_scores() {
        let output = render(valid_response());
        assert!(output.starts_with(
            "The AI detector Winston AI has detected the text as 65% human-written. Which means that the text is 35% likely to be written by an AI."
        ));
        assert!(output.contains(&format!(r#""""{SAMPLE}""" with a score of 0.65%"#)));
        assert!(output.contains("\n\n Full API Response : \n\n"));
        assert!(output.contains("\"score\": 65"));
        assert!(output.contains("\"readability_score\": 55.61"));
    }

    #[test]
    fn echo_keeps_input_key_order() {
        let output = render(valid_response());
        let status = output.find("\"status\"").expect("status");
        let length = output.find("\"length\": 1223").expect("length");
        let language = output.find("\"language\": \"es\"").expect("language");
        assert!(status < length && length < language);
    }

    #[test]
    fn top_four_sentences_by_descending_score() {
        let output = render(json!({
            "score": 40,
            "sentences": [
                {"text": "one", "score": 10},
                {"text": "two", "score": 90},
                {"text": "three", "score": 50},
                {"text": "four", "score": 90},
                {"text": "five", "score": 5},
                {"text": "six", "score": 50}
            ]
        }));
        assert!(output.contains(
            r#"are """two""" with a score of 90%, """four""" with a score of 90%, """three""" with a score of 50%, """six""" with a score of 50%."#
        ));
        assert!(!output.contains(r#""""one""""#));
        assert!(!output.contains(r#""""five""""#));
    }

    #[test]
    fn no_sentences_means_no_sentence_clause() {
        let output = render(json!({"score": 80, "sentences": []}));
        assert!(output.starts_with(
            "The AI detector Winston AI has detected the text as 80% human-written. Which means that the text is 20% likely to be written by an AI.\n\n Full API Response : \n\n"
        ));
    }

    #[test]
    fn missing_or_zero_score_is_a_soft_failure() {
        let missing = json!({"sentences": [], "version": "4.8"});
        assert_eq!(render(missing.clone()), pretty_json(&missing));

        let zero = json!({"score": 0, "sentences": []});
        assert_eq!(render(zero.clone()), pretty_json(&zero));
    }

    #[test]
    fn null_sentence_score_still_renders_prose() {
        let output = render(json!({
            "score": 65,
            "sentences": [
                {"text": "a", "score": null},
                {"text": "b", "score": 30},
                null
            ]
        }));
        assert!(output.starts_with(
            r#"The AI detector Winston AI has detected the text as 65% human-written. Which means that the text is 35% likely to be written by an AI. The sentences most likely written by an AI are """b""" with a score of 30%, """a""" with a score of 0%."#
        ));
    }

    #[test]
    fn assembling_twice_is_identical() {
        let response = Response::from_value(valid_response());
        assert_eq!(assemble(&response), assemble(&response));
    }
}
