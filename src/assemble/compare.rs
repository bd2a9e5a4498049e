use super::{FULL_RESPONSE_SEPARATOR, Response, format_number, pretty_json};
use crate::types::TextCompare;

pub fn assemble(response: &Response<TextCompare>) -> String {
    let Some((parsed, similarity)) = response.success_with(|parsed| parsed.similarity_score)
    else {
        return pretty_json(response.raw());
    };

    let mut output = format!(
        "The similarity score between the two texts is {}%. The first text is {}% similar to the second text. The second text is {}% similar to the first text.",
        format_number(similarity),
        format_number(parsed.first_text.similarity_percentage),
        format_number(parsed.second_text.similarity_percentage),
    );
    output.push_str(FULL_RESPONSE_SEPARATOR);
    output.push_str(&pretty_json(response.raw()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn side(percentage: u64) -> Value {
        json!({
            "total_word_count": 186,
            "matching_word_count": 186,
            "similarity_percentage": percentage,
            "items": [
                { "type": "identical", "word_count": 186, "index_start": 0, "length": 1287 }
            ]
        })
    }

    fn render(value: Value) -> String {
        assemble(&Response::from_value(value))
    }

    #[test]
    fn error_payload_is_echoed() {
        let output = render(json!({
            "error": "There was an error while detecting the similarity between the two texts."
        }));
        assert!(output.contains(
            "\"error\": \"There was an error while detecting the similarity between the two texts.\""
        ));
    }

    #[test]
    fn identical_texts() {
        let output = render(json!({
            "status": 200,
            "similarity_score": 100,
            "first_text": side(100),
            "second_text": side(100),
            "credits_used": 186,
            "credits_remaining": 99999814
        }));
        let (prose, echo) = output
            .split_once(FULL_RESPONSE_SEPARATOR)
            .expect("separator");
        assert_eq!(
            prose,
            "The similarity score between the two texts is 100%. The first text is 100% similar to the second text. The second text is 100% similar to the first text."
        );
        assert!(echo.contains("\"similarity_score\": 100"));
        assert!(echo.contains("\"items\": ["));
    }

    #[test]
    fn sides_are_reported_separately() {
        let output = render(json!({
            "similarity_score": 42.5,
            "first_text": side(30),
            "second_text": side(61)
        }));
        assert!(output.starts_with(
            "The similarity score between the two texts is 42.5%. The first text is 30% similar to the second text. The second text is 61% similar to the first text."
        ));
    }

    #[test]
    fn zero_similarity_is_a_soft_failure() {
        let body = json!({"similarity_score": 0, "first_text": side(0), "second_text": side(0)});
        assert_eq!(render(body.clone()), pretty_json(&body));
    }

    #[test]
    fn missing_side_renders_best_effort() {
        let output = render(json!({"similarity_score": 12}));
        assert!(output.contains("The first text is 0% similar to the second text."));
    }

    #[test]
    fn null_or_mistyped_side_renders_best_effort() {
        let output = render(json!({
            "similarity_score": 42,
            "first_text": null,
            "second_text": {"similarity_percentage": "61", "items": null}
        }));
        assert!(output.starts_with(
            "The similarity score between the two texts is 42%. The first text is 0% similar to the second text. The second text is 0% similar to the first text."
        ));
        assert!(output.contains("\"first_text\": null"));
    }
}
