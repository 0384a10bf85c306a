mod engine;
mod parse;
pub mod prompt;

use reflecthe_core::{Advice, AdviceRequest, AiSettings};

/// Request a coaching critique for a reflection draft. One outbound call per
/// invocation; network failures, empty output, and contract-violating
/// responses all surface as `Err` so the caller can notify the user and
/// clear its loading state.
pub async fn get_coaching(
    request: &AdviceRequest,
    settings: &AiSettings,
) -> Result<Advice, String> {
    let system = prompt::system_prompt();
    let user_msg = prompt::user_message(request);

    eprintln!(
        "[reflecthe-coach] sending to {} ({})",
        settings.provider, settings.model
    );

    let raw = engine::generate(settings, &system, &user_msg).await?;
    let advice = parse::parse_advice(&raw)?;
    eprintln!(
        "[reflecthe-coach] parsed critique with {} tags, {} questions",
        advice.dimension_tags.len(),
        advice.coaching_questions.len()
    );
    Ok(advice)
}
