//! Quiz — collects user preferences through six fixed questions.
//!
//! The collector walks the questions linearly, rejects empty input, and
//! normalizes the shape/color answers through keyword matching. The keyword
//! tables are user-visible content policy, not incidental parsing — they are
//! kept exactly as shipped.

pub mod collector;
pub mod model;

pub use collector::{PreferenceCollector, StepOutcome};
pub use model::{
    OrnamentColor, OrnamentShape, PreferenceRecord, Question, QuestionKey, QUESTIONS,
};
