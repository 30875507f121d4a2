use anyhow::{Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::CleaningConfig;
use crate::error::CleaningResult;
use crate::transformations::{
    clean_column_names, clean_country_column_with, convert_ransom_cost_to_numeric_with,
    drop_columns_with, drop_columns_with_url, drop_nan_rows_with, ensure_numeric_finite_with,
    replace_organisation_size_with, value_snake_case_with,
};

/// A single cleaning operation with its arguments.
///
/// Serialized with an `op` tag so a recipe can be written in TOML:
///
/// ```toml
/// [[steps]]
/// op = "drop_nan_rows"
/// columns = ["ransom_cost"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CleaningStep {
    DropNanRows { columns: Vec<String> },
    ValueSnakeCase { columns: Vec<String> },
    CleanColumnNames,
    DropColumns { columns: Vec<String> },
    DropColumnsWithUrl,
    ReplaceOrganisationSize { column: String },
    CleanCountryColumn { column: String },
    ConvertRansomCostToNumeric { column: String },
    EnsureNumericFinite { column: String },
}

impl CleaningStep {
    /// Operation name, as used in the `op` tag.
    pub fn name(&self) -> &'static str {
        match self {
            CleaningStep::DropNanRows { .. } => "drop_nan_rows",
            CleaningStep::ValueSnakeCase { .. } => "value_snake_case",
            CleaningStep::CleanColumnNames => "clean_column_names",
            CleaningStep::DropColumns { .. } => "drop_columns",
            CleaningStep::DropColumnsWithUrl => "drop_columns_with_url",
            CleaningStep::ReplaceOrganisationSize { .. } => "replace_organisation_size",
            CleaningStep::CleanCountryColumn { .. } => "clean_country_column",
            CleaningStep::ConvertRansomCostToNumeric { .. } => "convert_ransom_cost_to_numeric",
            CleaningStep::EnsureNumericFinite { .. } => "ensure_numeric_finite",
        }
    }

    /// Apply this step to a DataFrame.
    pub fn apply(&self, df: DataFrame, config: &CleaningConfig) -> CleaningResult<DataFrame> {
        match self {
            CleaningStep::DropNanRows { columns } => {
                drop_nan_rows_with(df, columns.as_slice(), config)
            }
            CleaningStep::ValueSnakeCase { columns } => {
                value_snake_case_with(df, columns.as_slice(), config)
            }
            CleaningStep::CleanColumnNames => clean_column_names(df),
            CleaningStep::DropColumns { columns } => {
                drop_columns_with(df, columns.as_slice(), config)
            }
            CleaningStep::DropColumnsWithUrl => drop_columns_with_url(df),
            CleaningStep::ReplaceOrganisationSize { column } => {
                replace_organisation_size_with(df, column, config)
            }
            CleaningStep::CleanCountryColumn { column } => {
                clean_country_column_with(df, column, config)
            }
            CleaningStep::ConvertRansomCostToNumeric { column } => {
                convert_ransom_cost_to_numeric_with(df, column, config)
            }
            CleaningStep::EnsureNumericFinite { column } => {
                ensure_numeric_finite_with(df, column, config)
            }
        }
    }
}

/// A cleaning recipe: configuration plus an ordered list of steps.
///
/// ```
/// use ransom_clean::preprocessing::{CleaningStep, PipelineSpec};
///
/// let spec = PipelineSpec::from_toml_str(r#"
/// [[steps]]
/// op = "clean_column_names"
///
/// [[steps]]
/// op = "convert_ransom_cost_to_numeric"
/// column = "cost_m"
/// "#).unwrap();
///
/// assert_eq!(spec.steps.len(), 2);
/// assert_eq!(spec.steps[0], CleaningStep::CleanColumnNames);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSpec {
    #[serde(default)]
    pub config: CleaningConfig,
    #[serde(default)]
    pub steps: Vec<CleaningStep>,
}

impl PipelineSpec {
    /// Parse a recipe from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse cleaning recipe")
    }

    /// Load a recipe from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read cleaning recipe {}", path.display()))?;
        Self::from_toml_str(&content)
    }
}

/// Summary of a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub rows_before: usize,
    pub rows_after: usize,
    pub columns_before: Vec<String>,
    pub columns_after: Vec<String>,
    pub steps_applied: Vec<String>,
}

impl CleaningReport {
    pub fn rows_dropped(&self) -> usize {
        self.rows_before.saturating_sub(self.rows_after)
    }
}

/// Result of a pipeline run
#[derive(Debug)]
pub struct CleaningOutcome {
    pub dataframe: DataFrame,
    pub report: CleaningReport,
}

/// Runs cleaning steps in order over one DataFrame
#[derive(Debug, Clone)]
pub struct CleaningPipeline {
    steps: Vec<CleaningStep>,
    config: CleaningConfig,
}

impl CleaningPipeline {
    /// Create a pipeline with the default configuration
    pub fn new(steps: Vec<CleaningStep>) -> Self {
        Self {
            steps,
            config: CleaningConfig::default(),
        }
    }

    /// Create a pipeline with a custom configuration
    pub fn with_config(steps: Vec<CleaningStep>, config: CleaningConfig) -> Self {
        Self { steps, config }
    }

    pub fn from_spec(spec: PipelineSpec) -> Self {
        Self::with_config(spec.steps, spec.config)
    }

    /// The usual recipe for the ransomware dataset: clean the column
    /// names, then recode the size, location and cost columns (named as
    /// they are after cleaning).
    pub fn ransom_recipe(size_column: &str, location_column: &str, cost_column: &str) -> Self {
        Self::new(vec![
            CleaningStep::CleanColumnNames,
            CleaningStep::ReplaceOrganisationSize {
                column: size_column.to_string(),
            },
            CleaningStep::CleanCountryColumn {
                column: location_column.to_string(),
            },
            CleaningStep::ConvertRansomCostToNumeric {
                column: cost_column.to_string(),
            },
        ])
    }

    pub fn steps(&self) -> &[CleaningStep] {
        &self.steps
    }

    pub fn config(&self) -> &CleaningConfig {
        &self.config
    }

    /// Apply every step in order.
    ///
    /// Stops at the first failing step; the error names the step and its
    /// position.
    pub fn run(&self, df: DataFrame) -> Result<CleaningOutcome> {
        let mut report = CleaningReport {
            rows_before: df.height(),
            columns_before: column_names(&df),
            ..Default::default()
        };

        let mut df = df;
        for (index, step) in self.steps.iter().enumerate() {
            log::info!("Cleaning step {}: {}", index + 1, step.name());
            df = step
                .apply(df, &self.config)
                .with_context(|| format!("Cleaning step {} ({}) failed", index + 1, step.name()))?;
            report.steps_applied.push(step.name().to_string());
        }

        report.rows_after = df.height();
        report.columns_after = column_names(&df);
        log::info!(
            "Cleaning finished: {} step(s), {} -> {} rows",
            report.steps_applied.len(),
            report.rows_before,
            report.rows_after
        );

        Ok(CleaningOutcome {
            dataframe: df,
            report,
        })
    }
}

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names().iter().map(|n| n.to_string()).collect()
}
