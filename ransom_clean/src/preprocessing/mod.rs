//! Declarative cleaning recipes.
//!
//! A [`PipelineSpec`] lists [`CleaningStep`]s (usually loaded from TOML) and
//! a [`CleaningPipeline`] runs them in order, returning the cleaned
//! DataFrame together with a [`CleaningReport`].

pub mod pipeline;

pub use pipeline::{CleaningOutcome, CleaningPipeline, CleaningReport, CleaningStep, PipelineSpec};
