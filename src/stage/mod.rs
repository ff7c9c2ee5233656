//! Stage sequencing — the START → QUIZ → GROWING → TREE machine.

pub mod controller;
pub mod state;

pub use controller::StageController;
pub use state::Stage;
