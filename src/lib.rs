//! Santa's Tree — quiz-to-generation-to-display pipeline.

pub mod app;
pub mod config;
pub mod error;
pub mod generator;
pub mod llm;
pub mod quiz;
pub mod stage;
pub mod tree;
