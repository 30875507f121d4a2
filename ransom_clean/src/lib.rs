//! Cleaning transforms for the ransomware cost dataset.
//!
//! The crate works on an in-memory polars [`DataFrame`](polars::prelude::DataFrame)
//! loaded by the caller. Each transform in [`transformations`] is
//! independent; [`preprocessing`] sequences them from a declarative recipe.

pub mod config;
pub mod error;
pub mod preprocessing;
pub mod transformations;

pub use config::{CleaningConfig, MissingColumnPolicy, NonFinitePolicy};
pub use error::{CleaningError, CleaningResult};
