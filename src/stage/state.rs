//! Stage state machine — tracks which screen the app is showing.

use serde::{Deserialize, Serialize};

/// The coarse-grained screens of the app.
///
/// Progresses Start → Quiz → Growing → Tree, then cycles back to Start on
/// reset. Tree is re-entrant, not terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Start,
    Quiz,
    Growing,
    Tree,
}

impl Stage {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: Stage) -> bool {
        use Stage::*;
        matches!(
            (self, target),
            (Start, Quiz) | (Quiz, Growing) | (Growing, Tree) | (Tree, Start)
        )
    }

    /// Get the next stage in the cycle.
    pub fn next(&self) -> Stage {
        use Stage::*;
        match self {
            Start => Quiz,
            Quiz => Growing,
            Growing => Tree,
            Tree => Start,
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::Start
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Start => "start",
            Self::Quiz => "quiz",
            Self::Growing => "growing",
            Self::Tree => "tree",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_transitions() {
        use Stage::*;
        let transitions = [(Start, Quiz), (Quiz, Growing), (Growing, Tree), (Tree, Start)];
        for (from, to) in transitions {
            assert!(from.can_transition_to(to), "{from} should transition to {to}");
        }
    }

    #[test]
    fn invalid_transitions() {
        use Stage::*;
        // Skip stages
        assert!(!Start.can_transition_to(Growing));
        assert!(!Quiz.can_transition_to(Tree));
        // Go backward mid-run
        assert!(!Growing.can_transition_to(Quiz));
        assert!(!Growing.can_transition_to(Start));
        // Self-transition
        assert!(!Tree.can_transition_to(Tree));
    }

    #[test]
    fn next_cycles() {
        use Stage::*;
        assert_eq!(Start.next(), Quiz);
        assert_eq!(Quiz.next(), Growing);
        assert_eq!(Growing.next(), Tree);
        assert_eq!(Tree.next(), Start);
    }

    #[test]
    fn display_matches_serde() {
        use Stage::*;
        for stage in [Start, Quiz, Growing, Tree] {
            let display = format!("{stage}");
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(format!("\"{display}\""), json);
        }
    }
}
