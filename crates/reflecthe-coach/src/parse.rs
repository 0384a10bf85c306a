use reflecthe_core::Advice;

/// Wire shape of the capability response. All three keys are required and no
/// other key is tolerated; serde enforces both, so a missing `questions` or a
/// string where an array belongs fails the whole decode.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct CoachPayload {
    analysis: String,
    tips: Vec<String>,
    questions: Vec<String>,
}

/// Parse raw LLM output into a typed `Advice`. Models wrap JSON in prose or
/// code fences, so the object span is extracted first; the decode itself is
/// strict — any contract deviation fails the operation.
pub fn parse_advice(raw: &str) -> Result<Advice, String> {
    let json_str =
        extract_json_object(raw).ok_or_else(|| "no JSON object in coach output".to_string())?;

    let payload: CoachPayload = serde_json::from_str(&json_str)
        .map_err(|e| format!("coach response violates the advice contract: {e}"))?;

    Ok(Advice {
        critique: payload.analysis,
        dimension_tags: payload.tips,
        coaching_questions: payload.questions,
    })
}

/// Extract the outermost JSON object substring from raw LLM output.
fn extract_json_object(raw: &str) -> Option<String> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(raw[start..=end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "analysis": "The draft is largely descriptive; the So What? level is missing.",
        "tips": ["K3 missing: no critical evaluation", "A2 present: session delivery described"],
        "questions": ["What were you assuming?", "How did students experience it?", "What would Schön call this?"]
    }"#;

    #[test]
    fn parses_a_contract_conforming_response() {
        let advice = parse_advice(VALID).unwrap();
        assert!(advice.critique.contains("descriptive"));
        assert_eq!(advice.dimension_tags.len(), 2);
        assert_eq!(advice.coaching_questions.len(), 3);
    }

    #[test]
    fn tolerates_code_fences_around_the_object() {
        let fenced = format!("```json\n{VALID}\n```");
        assert!(parse_advice(&fenced).is_ok());
        let prosed = format!("Here is your critique:\n{VALID}\nHope this helps!");
        assert!(parse_advice(&prosed).is_ok());
    }

    #[test]
    fn missing_questions_key_fails() {
        let raw = r#"{"analysis": "ok", "tips": ["K3"]}"#;
        assert!(parse_advice(raw).is_err());
    }

    #[test]
    fn wrong_type_fails() {
        let raw = r#"{"analysis": "ok", "tips": "K3", "questions": []}"#;
        assert!(parse_advice(raw).is_err());
        let raw = r#"{"analysis": 7, "tips": [], "questions": []}"#;
        assert!(parse_advice(raw).is_err());
    }

    #[test]
    fn extra_key_fails() {
        let raw = r#"{"analysis": "ok", "tips": [], "questions": [], "rewrite": "better text"}"#;
        assert!(parse_advice(raw).is_err());
    }

    #[test]
    fn non_json_body_fails() {
        assert!(parse_advice("I'm sorry, I can't help with that.").is_err());
        assert!(parse_advice("").is_err());
        assert!(parse_advice("} backwards {").is_err());
    }

    #[test]
    fn empty_arrays_are_allowed() {
        let raw = r#"{"analysis": "ok", "tips": [], "questions": []}"#;
        let advice = parse_advice(raw).unwrap();
        assert!(advice.dimension_tags.is_empty());
        assert!(advice.coaching_questions.is_empty());
    }
}
