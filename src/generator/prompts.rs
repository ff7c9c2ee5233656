//! Generation prompt and response extraction helpers.

use crate::quiz::PreferenceRecord;

/// System prompt: declares the required output shape and the content policy.
pub fn generation_system_prompt() -> String {
    "You are Santa's message writer for a magical Christmas tree.\n\n\
     Return a JSON object with:\n\
     1. \"starMessage\": A deeply personal, glowing, and heartwarming message \
     that makes the user feel amazing about who they are. It should be sincere \
     and positive, focusing on their inner light.\n\
     2. \"ornamentMessages\": An array of 5 strings:\n\
     - The first one MUST be sarcastically positive and end with \":)\". \
     (e.g., \"Wow, look at you being all festive and stuff. Truly a miracle of nature :)\")\n\
     - The other 4 should be humorously positive notes written as if Santa left them. \
     They should be funny, a bit informal, and festive.\n\n\
     Both \"starMessage\" (string) and \"ornamentMessages\" (array of strings) are required.\n\
     Return only JSON. No explanation or markdown formatting."
        .to_string()
}

/// User prompt: the four free-text preferences interpolated into an
/// instruction string.
pub fn generation_prompt(prefs: &PreferenceRecord) -> String {
    format!(
        "Generate a set of Christmas messages based on these details:\n\
         Activity: {activity}, Flavor: {flavor}, Vibe: {vibe}, Wish: {wish}.",
        activity = prefs.favorite_activity,
        flavor = prefs.favorite_flavor,
        vibe = prefs.holiday_vibe,
        wish = prefs.wish,
    )
}

/// Extract a JSON object from LLM output that might contain markdown or
/// extra text.
pub fn extract_json_object(text: &str) -> String {
    let trimmed = text.trim();

    // Already a JSON object
    if trimmed.starts_with('{') {
        return trimmed.to_string();
    }

    // Wrapped in markdown code block
    if let Some(start) = trimmed.find("```json") {
        let after = &trimmed[start + 7..];
        if let Some(end) = after.find("```") {
            return after[..end].trim().to_string();
        }
    }

    if let Some(start) = trimmed.find("```") {
        let after = &trimmed[start + 3..];
        if let Some(end) = after.find("```") {
            let inner = after[..end].trim();
            if inner.starts_with('{') {
                return inner.to_string();
            }
        }
    }

    // Try to find object bounds
    if let Some(start) = trimmed.find('{') {
        if let Some(end) = trimmed.rfind('}') {
            if end > start {
                return trimmed[start..=end].to_string();
            }
        }
    }

    // Give up, return as-is
    tracing::error!(text = trimmed, "Could not extract JSON object from LLM response");
    trimmed.to_string()
}
