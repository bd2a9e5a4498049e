use super::{PLAGIARISM_RESPONSE_SEPARATOR, Response, TOP_SOURCES, format_number, pretty_json};
use crate::types::PlagiarismDetection;
use serde_json::{Map, Value};

/// Top-level fields carried into the echo, in output order.
const ECHO_FIELDS: [&str; 7] = [
    "status",
    "scanInformation",
    "result",
    "sources",
    "citations",
    "credits_used",
    "credits_remaining",
];

const MATCH_SPANS_FIELD: &str = "plagiarismFound";

pub fn assemble(response: &Response<PlagiarismDetection>) -> String {
    let Some((parsed, score)) = response.success_with(|parsed| parsed.result.score) else {
        return pretty_json(response.raw());
    };

    let mut output = format!(
        "The plagiarism detection tool Winston AI has detected the text as {}% plagiarism.",
        format_number(score),
    );

    // Input order, no re-ranking.
    let sources: Vec<String> = parsed
        .sources
        .iter()
        .filter(|source| source.can_access)
        .take(TOP_SOURCES)
        .map(|source| {
            format!(
                r#""""{}""" with a plagiarism score of {}% plagiarism"#,
                source.url,
                format_number(source.score)
            )
        })
        .collect();

    if !sources.is_empty() {
        output.push_str(" The main plagiarized sources are ");
        output.push_str(&sources.join(", "));
    }

    output.push_str(PLAGIARISM_RESPONSE_SEPARATOR);
    output.push_str(&pretty_json(&redacted_echo(response.raw())));
    output
}

/// Copy of the response limited to `ECHO_FIELDS`, with the match spans
/// stripped from every source.
fn redacted_echo(raw: &Value) -> Value {
    let mut echo = Map::new();
    for field in ECHO_FIELDS {
        let Some(value) = raw.get(field) else {
            continue;
        };
        let value = if field == "sources" {
            without_match_spans(value)
        } else {
            value.clone()
        };
        echo.insert(field.to_string(), value);
    }
    Value::Object(echo)
}

fn without_match_spans(sources: &Value) -> Value {
    let mut sources = sources.clone();
    if let Some(items) = sources.as_array_mut() {
        for item in items {
            if let Some(obj) = item.as_object_mut() {
                obj.shift_remove(MATCH_SPANS_FIELD);
            }
        }
    }
    sources
}
