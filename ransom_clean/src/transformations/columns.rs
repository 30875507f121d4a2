use polars::prelude::*;
use std::collections::HashSet;

use crate::config::CleaningConfig;
use crate::error::{CleaningError, CleaningResult};
use crate::transformations::selection::ColumnSelection;
use crate::transformations::text::SPECIAL_CHARS;

/// Clean a single column name: lowercase, spaces to underscores, then
/// strip special characters.
///
/// ```
/// use ransom_clean::transformations::clean_column_name;
///
/// assert_eq!(clean_column_name("Cost ($M)"), "cost_m");
/// ```
pub fn clean_column_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let underscored = lowered.replace(' ', "_");
    SPECIAL_CHARS.replace_all(&underscored, "").into_owned()
}

/// Clean every column name of the DataFrame, keeping column order.
///
/// Fails with [`CleaningError::DuplicateColumn`] if two names become equal
/// once cleaned; the input is left as it was.
pub fn clean_column_names(mut df: DataFrame) -> CleaningResult<DataFrame> {
    let cleaned: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| clean_column_name(name.as_str()))
        .collect();

    let mut seen = HashSet::with_capacity(cleaned.len());
    for name in &cleaned {
        if !seen.insert(name.as_str()) {
            return Err(CleaningError::DuplicateColumn(name.clone()));
        }
    }

    df.set_column_names(cleaned.iter().map(String::as_str))?;
    log::debug!("clean_column_names: columns are now {:?}", cleaned);
    Ok(df)
}

/// Drop the given columns from the DataFrame
///
/// With the default configuration every name must exist; the first absent
/// one is reported as [`CleaningError::ColumnNotFound`] and nothing is
/// dropped.
pub fn drop_columns(
    df: DataFrame,
    columns: impl Into<ColumnSelection>,
) -> CleaningResult<DataFrame> {
    drop_columns_with(df, columns, &CleaningConfig::default())
}

/// [`drop_columns`] with an explicit configuration.
pub fn drop_columns_with(
    mut df: DataFrame,
    columns: impl Into<ColumnSelection>,
    config: &CleaningConfig,
) -> CleaningResult<DataFrame> {
    let selection = columns.into();
    let present = selection.resolve(&df, config.missing_columns.drop_columns)?;

    for name in &present {
        // A name repeated in the selection has already gone
        if df.get_column_index(name).is_some() {
            df = df.drop(name)?;
        }
    }
    log::debug!("drop_columns: dropped {:?}", present);
    Ok(df)
}

/// Drop every column whose name mentions a URL (`url`, `Source URL`, ...).
pub fn drop_columns_with_url(df: DataFrame) -> CleaningResult<DataFrame> {
    let url_columns: Vec<String> = df
        .get_column_names()
        .iter()
        .filter(|name| name.to_lowercase().contains("url"))
        .map(|name| name.to_string())
        .collect();

    if url_columns.is_empty() {
        return Ok(df);
    }
    drop_columns(df, url_columns)
}
