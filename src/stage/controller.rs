//! StageController — the single writer of the process-wide app state.

use std::time::Duration;

use tracing::{debug, info};

use crate::error::StageError;
use crate::generator::{MessageBundle, MessageGenerator};
use crate::quiz::PreferenceRecord;
use crate::stage::state::Stage;

/// Owns the stage plus the run's preference record and message bundle.
///
/// All transitions go through the methods below; each validates against the
/// transition table before touching state. Invariant: `Tree` is only
/// observable with both the record and the bundle present.
#[derive(Debug)]
pub struct StageController {
    stage: Stage,
    preferences: Option<PreferenceRecord>,
    bundle: Option<MessageBundle>,
    /// Minimum time spent in Growing, even if generation is instant.
    growing_floor: Duration,
    /// Bumped on every reset; a grow result from an older epoch is discarded.
    epoch: u64,
}

impl StageController {
    pub fn new(growing_floor: Duration) -> Self {
        Self {
            stage: Stage::Start,
            preferences: None,
            bundle: None,
            growing_floor,
            epoch: 0,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn preferences(&self) -> Option<&PreferenceRecord> {
        self.preferences.as_ref()
    }

    pub fn bundle(&self) -> Option<&MessageBundle> {
        self.bundle.as_ref()
    }

    fn transition(&mut self, target: Stage) -> Result<(), StageError> {
        if !self.stage.can_transition_to(target) {
            return Err(StageError::InvalidTransition {
                from: self.stage.to_string(),
                to: target.to_string(),
            });
        }
        debug!(from = %self.stage, to = %target, "Stage transition");
        self.stage = target;
        Ok(())
    }

    /// Start → Quiz, on explicit user action.
    pub fn begin(&mut self) -> Result<(), StageError> {
        self.transition(Stage::Quiz)
    }

    /// Quiz → Growing, on collector completion. The record is immutable from
    /// here on.
    pub fn complete_quiz(&mut self, prefs: PreferenceRecord) -> Result<(), StageError> {
        self.transition(Stage::Growing)?;
        self.preferences = Some(prefs);
        Ok(())
    }

    /// Growing → Tree: run generation and the floor timer together and
    /// proceed when both are done — a join, not a race, so the growing
    /// screen stays readable even when generation resolves instantly.
    pub async fn grow(&mut self, generator: &MessageGenerator) -> Result<(), StageError> {
        if self.stage != Stage::Growing {
            return Err(StageError::InvalidTransition {
                from: self.stage.to_string(),
                to: Stage::Tree.to_string(),
            });
        }
        let prefs = self.preferences.clone().ok_or_else(|| StageError::MissingData {
            what: "preference record".to_string(),
            stage: self.stage.to_string(),
        })?;

        let epoch = self.epoch;
        let (bundle, ()) = tokio::join!(
            generator.generate(&prefs),
            tokio::time::sleep(self.growing_floor),
        );

        // A reset during generation moves the epoch on; the stale bundle is
        // dropped rather than applied.
        if epoch != self.epoch {
            info!("Discarding generation result from a reset run");
            return Ok(());
        }

        self.bundle = Some(bundle);
        self.transition(Stage::Tree)
    }

    /// Tree → Start, on explicit user action. Discards the record and bundle.
    pub fn reset(&mut self) -> Result<(), StageError> {
        self.transition(Stage::Start)?;
        self.preferences = None;
        self.bundle = None;
        self.epoch += 1;
        Ok(())
    }
}
