// src/extract.rs
//
// Recovers a structured verdict from the loosely formatted text a generative
// model returns. Models conventionally wrap JSON in prose or fenced code
// blocks, so extraction runs as an explicit pipeline: strip fence markers,
// slice the brace-delimited span, then parse strictly. Each phase is a named
// function so the brace-span heuristic can be swapped for a schema-aware
// parser without touching the orchestration.

use regex::Regex;
use serde_json::Value;

use crate::errors::{EvalError, Result};
use crate::models::{EvaluationResult, MemeCandidate};

/// Removes fenced code-block markers (triple backtick, optionally followed by
/// a language tag) and trims surrounding whitespace. Idempotent.
pub fn strip_code_fences(raw: &str) -> String {
    let re = Regex::new(r"```[a-zA-Z0-9_-]*").unwrap();
    re.replace_all(raw, "").trim().to_string()
}

/// Locates the candidate JSON payload: the span from the first `{` to the
/// last `}`, inclusive. Returns `None` when either brace is missing.
///
/// Known weak point: the span is greedy, so multiple brace-delimited blocks
/// or outermost-adjacent braces inside string values can mis-slice.
pub fn find_json_span(cleaned: &str) -> Option<&str> {
    let start = cleaned.find('{')?;
    let end = cleaned.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&cleaned[start..=end])
}

/// JSON truthiness for the `isMeme` discriminator: `false`, `null`, `0`,
/// and `""` are falsy; every other value is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Interprets a raw classification reply as a typed `EvaluationResult`.
///
/// The parsed object's `isMeme` field is the discriminator: a truthy value
/// selects the `MemeCandidate` variant, a falsy or absent one selects
/// `NotMeme`. Missing candidate fields come through as `None` rather than
/// failing validation.
pub fn interpret_response(raw: &str) -> Result<EvaluationResult> {
    let cleaned = strip_code_fences(raw);

    let span = find_json_span(&cleaned).ok_or_else(|| {
        EvalError::MalformedResponse("valid JSON structure not found".to_string())
    })?;

    let value: Value = serde_json::from_str(span)
        .map_err(|e| EvalError::MalformedResponse(e.to_string()))?;

    if value.get("isMeme").is_some_and(is_truthy) {
        let candidate: MemeCandidate = serde_json::from_value(value)
            .map_err(|e| EvalError::MalformedResponse(e.to_string()))?;
        Ok(EvaluationResult::MemeCandidate(candidate))
    } else {
        let reason = value
            .get("reason")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Ok(EvaluationResult::NotMeme { reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_fences_with_language_tag() {
        let raw = "```json\n{\"isMeme\": false}\n```";
        assert_eq!(strip_code_fences(raw), "{\"isMeme\": false}");
    }

    #[test]
    fn test_strip_fences_is_idempotent() {
        let raw = "```json\n{\"a\": 1}\n```";
        let once = strip_code_fences(raw);
        let twice = strip_code_fences(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_strip_fences_leaves_plain_text_alone() {
        let raw = "  {\"a\": 1}  ";
        assert_eq!(strip_code_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_find_json_span_ignores_surrounding_prose() {
        let cleaned = "Sure! Here is the verdict: {\"isMeme\": false} Hope that helps.";
        assert_eq!(find_json_span(cleaned), Some("{\"isMeme\": false}"));
    }

    #[test]
    fn test_find_json_span_missing_braces() {
        assert_eq!(find_json_span("no json here"), None);
        assert_eq!(find_json_span("only open {"), None);
        assert_eq!(find_json_span("only close }"), None);
        assert_eq!(find_json_span("} reversed {"), None);
    }

    #[test]
    fn test_interpret_not_meme() {
        let result = interpret_response(r#"{"isMeme": false, "reason": "too mundane"}"#).unwrap();
        assert_eq!(
            result,
            EvaluationResult::NotMeme {
                reason: "too mundane".to_string()
            }
        );
    }

    #[test]
    fn test_interpret_absent_discriminator_is_not_meme() {
        let result = interpret_response(r#"{"reason": "no verdict given"}"#).unwrap();
        assert!(matches!(result, EvaluationResult::NotMeme { .. }));
    }

    #[test]
    fn test_interpret_falsy_discriminators_are_not_meme() {
        for raw in [
            r#"{"isMeme": null, "reason": "null verdict"}"#,
            r#"{"isMeme": 0, "reason": "zero verdict"}"#,
            r#"{"isMeme": "", "reason": "empty verdict"}"#,
        ] {
            let result = interpret_response(raw).unwrap();
            assert!(matches!(result, EvaluationResult::NotMeme { .. }), "{}", raw);
        }
    }

    #[test]
    fn test_interpret_truthy_numeric_discriminator_is_meme() {
        let result =
            interpret_response(r#"{"isMeme": 1, "reason": "numeric truthy"}"#).unwrap();
        match result {
            EvaluationResult::MemeCandidate(c) => assert_eq!(c.reason, "numeric truthy"),
            other => panic!("expected MemeCandidate, got {:?}", other),
        }
    }

    #[test]
    fn test_interpret_truthy_string_discriminator_is_meme() {
        let result =
            interpret_response(r#"{"isMeme": "yes", "reason": "string truthy"}"#).unwrap();
        assert!(matches!(result, EvaluationResult::MemeCandidate(_)));
    }

    #[test]
    fn test_interpret_fenced_candidate() {
        let raw = "```json\n{\"isMeme\": true, \"reason\": \"absurd\", \"name\": \"MiniMammoth\", \"symbol\": \"MAMMO\", \"logoPrompt\": \"a tiny wooly mammoth in a teacup\", \"tweet\": \"tiny tusks\", \"backstory\": \"it was cold\"}\n```";
        match interpret_response(raw).unwrap() {
            EvaluationResult::MemeCandidate(c) => {
                assert_eq!(c.reason, "absurd");
                assert_eq!(c.name.as_deref(), Some("MiniMammoth"));
                assert_eq!(c.symbol.as_deref(), Some("MAMMO"));
                assert_eq!(
                    c.logo_prompt.as_deref(),
                    Some("a tiny wooly mammoth in a teacup")
                );
                assert_eq!(c.logo_url, None);
            }
            other => panic!("expected MemeCandidate, got {:?}", other),
        }
    }

    #[test]
    fn test_interpret_candidate_with_missing_fields() {
        let result = interpret_response(r#"{"isMeme": true, "reason": "funny"}"#).unwrap();
        match result {
            EvaluationResult::MemeCandidate(c) => {
                assert_eq!(c.reason, "funny");
                assert_eq!(c.name, None);
                assert_eq!(c.logo_prompt, None);
            }
            other => panic!("expected MemeCandidate, got {:?}", other),
        }
    }

    #[test]
    fn test_interpret_no_braces_is_malformed() {
        let err = interpret_response("I could not produce a verdict.").unwrap_err();
        assert!(matches!(err, EvalError::MalformedResponse(_)));
    }

    #[test]
    fn test_interpret_broken_json_is_malformed() {
        let err = interpret_response(r#"{"isMeme": false, "reason": }"#).unwrap_err();
        assert!(matches!(err, EvalError::MalformedResponse(_)));
    }

    #[test]
    fn test_reason_preserves_input_text_unescaped() {
        let text = "Please make a miniature pet wooly mammoth";
        let raw = format!(r#"{{"isMeme": false, "reason": "{}"}}"#, text);
        let result = interpret_response(&raw).unwrap();
        assert_eq!(
            result,
            EvaluationResult::NotMeme {
                reason: text.to_string()
            }
        );
    }
}
