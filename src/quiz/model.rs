//! Preference record and question definitions.

use serde::{Deserialize, Serialize};

/// Shape of the user's custom ornament, derived from their free-text answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrnamentShape {
    Circle,
    Star,
    Gingerbread,
}

impl Default for OrnamentShape {
    fn default() -> Self {
        Self::Circle
    }
}

impl std::fmt::Display for OrnamentShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Circle => "circle",
            Self::Star => "star",
            Self::Gingerbread => "gingerbread",
        };
        write!(f, "{s}")
    }
}

/// Signature ornament color token, derived from their free-text answer.
///
/// Four rules plus a red default. There is deliberately no rule for colors
/// like purple or silver; those fall through to red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrnamentColor {
    Red,
    Gold,
    Blue,
    Green,
}

impl Default for OrnamentColor {
    fn default() -> Self {
        Self::Red
    }
}

impl std::fmt::Display for OrnamentColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Red => "red",
            Self::Gold => "gold",
            Self::Blue => "blue",
            Self::Green => "green",
        };
        write!(f, "{s}")
    }
}

/// The completed answers from one quiz run.
///
/// Built one field per step; immutable once handed to the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    pub favorite_activity: String,
    pub favorite_flavor: String,
    pub holiday_vibe: String,
    pub wish: String,
    pub ornament_shape: OrnamentShape,
    pub ornament_color: OrnamentColor,
}

/// Which preference a question fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKey {
    FavoriteActivity,
    FavoriteFlavor,
    OrnamentShape,
    OrnamentColor,
    HolidayVibe,
    Wish,
}

/// One quiz question: the key it fills, the prompt, and a placeholder hint.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub key: QuestionKey,
    pub prompt: &'static str,
    pub placeholder: &'static str,
}

/// The six questions, asked in this exact order.
pub const QUESTIONS: &[Question] = &[
    Question {
        key: QuestionKey::FavoriteActivity,
        prompt: "What's your favorite winter activity?",
        placeholder: "e.g., Extreme Snowboarding or Napping near fire",
    },
    Question {
        key: QuestionKey::FavoriteFlavor,
        prompt: "Which flavor reminds you most of Christmas?",
        placeholder: "e.g., Burnt Gingerbread or Peppermint Mocha",
    },
    Question {
        key: QuestionKey::OrnamentShape,
        prompt: "Describe your custom ornament shape:",
        placeholder: "e.g., A tiny penguin, a star, or a circle",
    },
    Question {
        key: QuestionKey::OrnamentColor,
        prompt: "What's the signature color of your ornaments?",
        placeholder: "e.g., Neon Purple or Midnight Gold",
    },
    Question {
        key: QuestionKey::HolidayVibe,
        prompt: "Describe your ideal holiday vibe in 3 words:",
        placeholder: "e.g., Chaotic, Cozy, Loud",
    },
    Question {
        key: QuestionKey::Wish,
        prompt: "Finally, what is your biggest wish for the year?",
        placeholder: "Type your wish here...",
    },
];
