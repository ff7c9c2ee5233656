//! Message bundle — the generation output contract.

use serde::{Deserialize, Serialize};

/// Number of ornament hotspots on the tree.
pub const ORNAMENT_COUNT: usize = 5;

/// Star message used whenever the service omits one.
pub const FALLBACK_STAR_MESSAGE: &str =
    "You are a brilliant light in this world, and your kindness is the greatest gift of all.";

/// Ornament messages used whenever generation fails or returns fewer than
/// five items. Substituted as a whole, never mixed with partial results.
pub const FALLBACK_ORNAMENT_MESSAGES: [&str; ORNAMENT_COUNT] = [
    "So glad you're trying your best to be on the nice list this late in the game :)",
    "Santa saw that. But Santa also likes cookies, so we can negotiate.",
    "Note to self: This person needs extra cocoa and fewer adult responsibilities.",
    "Your holiday spirit is almost as loud as my reindeer's footsteps on a tin roof!",
    "I checked the list twice. You're still in the 'mostly okay' category. Good job!",
];

/// One star message plus exactly five ornament messages.
///
/// Produced once per quiz completion and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageBundle {
    pub star_message: String,
    pub ornament_messages: [String; ORNAMENT_COUNT],
}

/// The shape the service is asked to return. Field names are part of the
/// wire contract with the model.
#[derive(Debug, Deserialize)]
pub struct RawGeneration {
    #[serde(default, rename = "starMessage")]
    pub star_message: Option<String>,
    #[serde(default, rename = "ornamentMessages")]
    pub ornament_messages: Option<Vec<String>>,
}

impl MessageBundle {
    /// The fixed bundle used whenever generation fails entirely.
    pub fn fallback() -> Self {
        Self {
            star_message: FALLBACK_STAR_MESSAGE.to_string(),
            ornament_messages: FALLBACK_ORNAMENT_MESSAGES.map(String::from),
        }
    }

    /// Repair a raw service response into a complete bundle.
    ///
    /// Per-field substitution: a missing or empty star message falls back on
    /// its own; an ornament list shorter than five is replaced in full (the
    /// threshold is length >= 5, not "use what's available"). Longer lists
    /// are truncated to the five anchors the tree has.
    pub fn from_raw(raw: RawGeneration) -> Self {
        let star_message = match raw.star_message {
            Some(s) if !s.trim().is_empty() => s,
            _ => FALLBACK_STAR_MESSAGE.to_string(),
        };

        let ornament_messages = match raw.ornament_messages {
            Some(messages) if messages.len() >= ORNAMENT_COUNT => {
                let mut iter = messages.into_iter();
                std::array::from_fn(|_| iter.next().unwrap_or_default())
            }
            _ => FALLBACK_ORNAMENT_MESSAGES.map(String::from),
        };

        Self {
            star_message,
            ornament_messages,
        }
    }
}
