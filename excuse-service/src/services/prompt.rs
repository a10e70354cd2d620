//! Prompt construction for AI excuse generation.

/// Situation used when the caller provides no context.
const DEFAULT_SITUATION: &str = "a casual social interaction";

/// Phrasing hint embedded in the prompt for each length preference.
pub fn length_hint(length: &str) -> &'static str {
    match length {
        "short" => "1-2 sentence, concise",
        "medium" => "2-4 sentences",
        "long" => "5-7 sentences",
        _ => "2 sentences",
    }
}

/// Build the fixed-structure excuse prompt: persona, task instructions, then
/// the request parameters.
pub fn build_prompt(context: &str, category: &str, tone: &str, length: &str) -> String {
    let situation = if context.is_empty() {
        DEFAULT_SITUATION
    } else {
        context
    };

    format!(
        "You are an awkwardly charming, quick-witted introvert who is trying to gracefully \
         escape an unwanted conversation. You speak from your own perspective, as if you \
         are the one making the excuse in real life.\n\n\
         The goal: Give a short, believable excuse that sounds natural, feels relatable, \
         and makes the other person smile or laugh. Keep it polite and harmless, but add \
         a dash of self-deprecating humor or cleverness.\n\n\
         Situation/Context: {situation}\n\
         Category (reason type): {category}\n\
         Tone (style of excuse): {tone}\n\
         Preferred Length: {hint}\n\n\
         Write ONE excuse in the first person (using 'I'), as if I’m saying it right now. \
         Make it sound human, slightly awkward in a cute way, and funny enough that the \
         other person won’t take offense.",
        situation = situation,
        category = category,
        tone = tone,
        hint = length_hint(length),
    )
}
