//! Cleaning configuration and TOML file support.
//!
//! Every operation has its own missing-column policy. The defaults keep the
//! historical behaviour of each operation: the value normalizers skip
//! columns that are not present while the structural operations fail.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{CleaningError, CleaningResult};

/// What an operation does when a referenced column is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingColumnPolicy {
    /// Raise [`CleaningError::ColumnNotFound`] and leave the table untouched.
    Fail,
    /// Ignore the absent column.
    Skip,
}

/// What [`ensure_numeric_finite`](crate::transformations::ensure_numeric_finite)
/// does with infinite values after coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonFinitePolicy {
    /// Count them but leave them in the column.
    #[default]
    Keep,
    /// Replace them with null.
    Null,
}

/// Per-operation missing-column policies.
///
/// Unknown keys are rejected so a misspelled operation name cannot leave
/// its default policy silently in force.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MissingColumnPolicies {
    pub drop_nan_rows: MissingColumnPolicy,
    pub value_snake_case: MissingColumnPolicy,
    pub drop_columns: MissingColumnPolicy,
    pub replace_organisation_size: MissingColumnPolicy,
    pub clean_country_column: MissingColumnPolicy,
    pub convert_ransom_cost_to_numeric: MissingColumnPolicy,
    pub ensure_numeric_finite: MissingColumnPolicy,
}

impl Default for MissingColumnPolicies {
    fn default() -> Self {
        Self {
            drop_nan_rows: MissingColumnPolicy::Fail,
            value_snake_case: MissingColumnPolicy::Skip,
            drop_columns: MissingColumnPolicy::Fail,
            replace_organisation_size: MissingColumnPolicy::Fail,
            clean_country_column: MissingColumnPolicy::Skip,
            convert_ransom_cost_to_numeric: MissingColumnPolicy::Fail,
            ensure_numeric_finite: MissingColumnPolicy::Fail,
        }
    }
}

impl MissingColumnPolicies {
    /// Same policy for every operation.
    pub fn uniform(policy: MissingColumnPolicy) -> Self {
        Self {
            drop_nan_rows: policy,
            value_snake_case: policy,
            drop_columns: policy,
            replace_organisation_size: policy,
            clean_country_column: policy,
            convert_ransom_cost_to_numeric: policy,
            ensure_numeric_finite: policy,
        }
    }
}

/// Configuration shared by all cleaning operations.
///
/// # Examples
///
/// ```
/// use ransom_clean::config::{CleaningConfig, MissingColumnPolicy, NonFinitePolicy};
///
/// let config = CleaningConfig::from_toml_str(r#"
/// non_finite = "null"
///
/// [missing_columns]
/// clean_country_column = "fail"
/// "#).unwrap();
///
/// assert_eq!(config.non_finite, NonFinitePolicy::Null);
/// assert_eq!(config.missing_columns.clean_country_column, MissingColumnPolicy::Fail);
/// assert_eq!(config.missing_columns.value_snake_case, MissingColumnPolicy::Skip);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleaningConfig {
    pub missing_columns: MissingColumnPolicies,
    pub non_finite: NonFinitePolicy,
}

impl CleaningConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> CleaningResult<Self> {
        toml::from_str(content).map_err(|e| {
            CleaningError::Configuration(format!("Failed to parse config: {}", e))
        })
    }

    /// Load a configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(CleaningConfig)` if successful
    /// * `Err(CleaningError::Configuration)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> CleaningResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            CleaningError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        Self::from_toml_str(&content)
    }
}
