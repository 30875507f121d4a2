use polars::prelude::*;

use crate::config::MissingColumnPolicy;
use crate::error::{CleaningError, CleaningResult};

/// One or more column names an operation applies to.
///
/// Built from a single name or any list of names, so callers can write
/// `drop_columns(df, "url")` as well as `drop_columns(df, ["a", "b"])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection(Vec<String>);

impl ColumnSelection {
    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names from this selection that exist in `df`, in selection order.
    ///
    /// With [`MissingColumnPolicy::Fail`] the first absent name is reported
    /// as [`CleaningError::ColumnNotFound`]. With `Skip` absent names are
    /// dropped from the result.
    pub(crate) fn resolve(
        &self,
        df: &DataFrame,
        policy: MissingColumnPolicy,
    ) -> CleaningResult<Vec<String>> {
        let mut present = Vec::with_capacity(self.0.len());
        for name in &self.0 {
            if df.get_column_index(name).is_some() {
                present.push(name.clone());
                continue;
            }
            match policy {
                MissingColumnPolicy::Fail => {
                    return Err(CleaningError::ColumnNotFound(name.clone()));
                }
                MissingColumnPolicy::Skip => {
                    log::warn!("Skipping column '{}': not present in DataFrame", name);
                }
            }
        }
        Ok(present)
    }
}

impl From<&str> for ColumnSelection {
    fn from(name: &str) -> Self {
        Self(vec![name.to_string()])
    }
}

impl From<String> for ColumnSelection {
    fn from(name: String) -> Self {
        Self(vec![name])
    }
}

impl From<&String> for ColumnSelection {
    fn from(name: &String) -> Self {
        Self(vec![name.clone()])
    }
}

impl From<Vec<String>> for ColumnSelection {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl From<Vec<&str>> for ColumnSelection {
    fn from(names: Vec<&str>) -> Self {
        Self(names.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ColumnSelection {
    fn from(names: &[&str]) -> Self {
        Self(names.iter().map(|s| s.to_string()).collect())
    }
}

impl From<&[String]> for ColumnSelection {
    fn from(names: &[String]) -> Self {
        Self(names.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for ColumnSelection {
    fn from(names: [&str; N]) -> Self {
        Self(names.iter().map(|s| s.to_string()).collect())
    }
}

/// Fetch a column as a materialized series, honouring the missing-column policy.
///
/// Returns `Ok(None)` when the column is absent and the policy is `Skip`.
pub(crate) fn lookup_series(
    df: &DataFrame,
    name: &str,
    policy: MissingColumnPolicy,
) -> CleaningResult<Option<Series>> {
    match df.column(name) {
        Ok(column) => Ok(Some(column.as_materialized_series().clone())),
        Err(_) => match policy {
            MissingColumnPolicy::Fail => Err(CleaningError::ColumnNotFound(name.to_string())),
            MissingColumnPolicy::Skip => {
                log::warn!("Skipping column '{}': not present in DataFrame", name);
                Ok(None)
            }
        },
    }
}
