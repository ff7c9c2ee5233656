//! PreferenceCollector — linear walk over the six questions.

use crate::error::QuizError;

use super::model::{
    OrnamentColor, OrnamentShape, PreferenceRecord, Question, QuestionKey, QUESTIONS,
};

/// Outcome of accepting one answer.
#[derive(Debug, Clone)]
pub enum StepOutcome {
    /// The answer was stored; here is the next question.
    Advanced(Question),
    /// That was the final answer; the record is complete.
    Complete(PreferenceRecord),
}

/// In-progress answers. All optional until their step has been taken.
#[derive(Debug, Clone, Default)]
struct Draft {
    favorite_activity: Option<String>,
    favorite_flavor: Option<String>,
    holiday_vibe: Option<String>,
    wish: Option<String>,
    ornament_shape: Option<OrnamentShape>,
    ornament_color: Option<OrnamentColor>,
}

/// Walks the fixed question list, one non-empty answer per step.
///
/// Progress is linear and non-reversible: there is no back operation, and
/// once the final answer is in, the collector refuses further input.
#[derive(Debug, Default)]
pub struct PreferenceCollector {
    step: usize,
    draft: Draft,
    complete: bool,
}

impl PreferenceCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-based index of the current step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Total number of questions.
    pub fn total(&self) -> usize {
        QUESTIONS.len()
    }

    /// The question currently awaiting an answer, if any.
    pub fn current_question(&self) -> Option<Question> {
        if self.complete {
            None
        } else {
            QUESTIONS.get(self.step).copied()
        }
    }

    /// Accept one answer for the current question.
    ///
    /// Empty or whitespace-only input is rejected and the step does not
    /// advance. Otherwise the trimmed input is normalized per key and stored.
    pub fn answer(&mut self, input: &str) -> Result<StepOutcome, QuizError> {
        if self.complete {
            return Err(QuizError::AlreadyComplete);
        }
        let value = input.trim();
        if value.is_empty() {
            return Err(QuizError::EmptyAnswer);
        }

        let question = QUESTIONS[self.step];
        match question.key {
            QuestionKey::FavoriteActivity => {
                self.draft.favorite_activity = Some(value.to_string());
            }
            QuestionKey::FavoriteFlavor => {
                self.draft.favorite_flavor = Some(value.to_string());
            }
            QuestionKey::HolidayVibe => {
                self.draft.holiday_vibe = Some(value.to_string());
            }
            QuestionKey::Wish => {
                self.draft.wish = Some(value.to_string());
            }
            QuestionKey::OrnamentShape => {
                self.draft.ornament_shape = Some(map_shape(value));
            }
            QuestionKey::OrnamentColor => {
                self.draft.ornament_color = Some(map_color(value));
            }
        }

        self.step += 1;
        if self.step < QUESTIONS.len() {
            Ok(StepOutcome::Advanced(QUESTIONS[self.step]))
        } else {
            self.complete = true;
            Ok(StepOutcome::Complete(self.finish()))
        }
    }

    /// Assemble the record. Only called once all six steps have been taken,
    /// so every field is present.
    fn finish(&mut self) -> PreferenceRecord {
        let draft = std::mem::take(&mut self.draft);
        PreferenceRecord {
            favorite_activity: draft.favorite_activity.unwrap_or_default(),
            favorite_flavor: draft.favorite_flavor.unwrap_or_default(),
            holiday_vibe: draft.holiday_vibe.unwrap_or_default(),
            wish: draft.wish.unwrap_or_default(),
            ornament_shape: draft.ornament_shape.unwrap_or_default(),
            ornament_color: draft.ornament_color.unwrap_or_default(),
        }
    }
}

/// Keyword mapping for the ornament shape answer.
fn map_shape(value: &str) -> OrnamentShape {
    let lower = value.to_lowercase();
    if lower.contains("star") {
        OrnamentShape::Star
    } else if lower.contains("ginger") {
        OrnamentShape::Gingerbread
    } else {
        OrnamentShape::Circle
    }
}

/// Keyword mapping for the ornament color answer.
///
/// Very basic mapping for common colors; everything unmatched is red.
fn map_color(value: &str) -> OrnamentColor {
    let lower = value.to_lowercase();
    if lower.contains("gold") || lower.contains("yellow") {
        OrnamentColor::Gold
    } else if lower.contains("blue") {
        OrnamentColor::Blue
    } else if lower.contains("green") {
        OrnamentColor::Green
    } else {
        OrnamentColor::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_with(answers: [&str; 6]) -> PreferenceRecord {
        let mut collector = PreferenceCollector::new();
        let mut record = None;
        for answer in answers {
            match collector.answer(answer).unwrap() {
                StepOutcome::Advanced(_) => {}
                StepOutcome::Complete(r) => record = Some(r),
            }
        }
        record.expect("six answers should complete the quiz")
    }

    #[test]
    fn full_run_populates_all_fields_in_order() {
        let record = complete_with([
            "Napping near fire",
            "Peppermint Mocha",
            "a tiny star please",
            "Midnight Gold",
            "Chaotic, Cozy, Loud",
            "world peace",
        ]);
        assert_eq!(record.favorite_activity, "Napping near fire");
        assert_eq!(record.favorite_flavor, "Peppermint Mocha");
        assert_eq!(record.ornament_shape, OrnamentShape::Star);
        assert_eq!(record.ornament_color, OrnamentColor::Gold);
        assert_eq!(record.holiday_vibe, "Chaotic, Cozy, Loud");
        assert_eq!(record.wish, "world peace");
    }

    #[test]
    fn empty_input_never_advances() {
        let mut collector = PreferenceCollector::new();
        assert!(matches!(
            collector.answer(""),
            Err(QuizError::EmptyAnswer)
        ));
        assert!(matches!(
            collector.answer("   \t "),
            Err(QuizError::EmptyAnswer)
        ));
        assert_eq!(collector.step(), 0);
    }

    #[test]
    fn answers_are_trimmed() {
        let record = complete_with([
            "  sledding  ",
            " cocoa ",
            "circle",
            "red",
            "calm",
            " snow ",
        ]);
        assert_eq!(record.favorite_activity, "sledding");
        assert_eq!(record.wish, "snow");
    }

    #[test]
    fn shape_mapping() {
        assert_eq!(map_shape("I want a star"), OrnamentShape::Star);
        assert_eq!(map_shape("gingerbread man"), OrnamentShape::Gingerbread);
        assert_eq!(map_shape("penguin"), OrnamentShape::Circle);
        assert_eq!(map_shape("STARfish"), OrnamentShape::Star);
    }

    #[test]
    fn color_mapping() {
        assert_eq!(map_color("Midnight Gold"), OrnamentColor::Gold);
        assert_eq!(map_color("yellowish"), OrnamentColor::Gold);
        assert_eq!(map_color("ocean BLUE"), OrnamentColor::Blue);
        assert_eq!(map_color("forest green"), OrnamentColor::Green);
        // No purple rule exists; unmatched colors fall through to red.
        assert_eq!(map_color("Neon Purple"), OrnamentColor::Red);
        assert_eq!(map_color("silver"), OrnamentColor::Red);
    }

    #[test]
    fn rejects_answers_after_completion() {
        let mut collector = PreferenceCollector::new();
        for _ in 0..6 {
            collector.answer("something").unwrap();
        }
        assert!(matches!(
            collector.answer("extra"),
            Err(QuizError::AlreadyComplete)
        ));
        assert!(collector.current_question().is_none());
    }

    #[test]
    fn progress_reporting() {
        let mut collector = PreferenceCollector::new();
        assert_eq!(collector.total(), 6);
        assert_eq!(collector.step(), 0);
        collector.answer("skiing").unwrap();
        assert_eq!(collector.step(), 1);
        assert_eq!(
            collector.current_question().unwrap().key,
            QuestionKey::FavoriteFlavor
        );
    }
}
