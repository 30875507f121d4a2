use polars::prelude::*;

use crate::config::CleaningConfig;
use crate::error::CleaningResult;
use crate::transformations::selection::lookup_series;

/// Organisation-size codes and their labels.
pub const ORGANISATION_SIZE_LABELS: [(i64, &str); 6] = [
    (1, "small"),
    (5, "small"),
    (10, "medium"),
    (25, "medium"),
    (100, "large"),
    (300, "large"),
];

/// Label for an organisation-size code, `None` for anything outside the table.
pub fn organisation_size_label(code: f64) -> Option<&'static str> {
    ORGANISATION_SIZE_LABELS
        .iter()
        .find(|(key, _)| *key as f64 == code)
        .map(|(_, label)| *label)
}

/// Replace organisation-size codes with `small`, `medium` or `large`
///
/// Values that are not one of the known codes, including text, become
/// null. Boolean columns are read as 0/1, so `true` is labelled `small`.
/// The column must exist unless the configuration says otherwise.
///
/// # Example
///
/// ```
/// use polars::prelude::*;
/// use ransom_clean::transformations::replace_organisation_size;
///
/// let df = df!("organisation_size" => &[1i64, 25, 300, 7]).unwrap();
/// let df = replace_organisation_size(df, "organisation_size").unwrap();
/// let labels: Vec<Option<&str>> = df.column("organisation_size").unwrap().str().unwrap().into_iter().collect();
/// assert_eq!(labels, vec![Some("small"), Some("medium"), Some("large"), None]);
/// ```
pub fn replace_organisation_size(df: DataFrame, column: &str) -> CleaningResult<DataFrame> {
    replace_organisation_size_with(df, column, &CleaningConfig::default())
}

/// [`replace_organisation_size`] with an explicit configuration.
pub fn replace_organisation_size_with(
    mut df: DataFrame,
    column: &str,
    config: &CleaningConfig,
) -> CleaningResult<DataFrame> {
    let Some(series) =
        lookup_series(&df, column, config.missing_columns.replace_organisation_size)?
    else {
        return Ok(df);
    };

    let dtype = series.dtype();
    let labels: StringChunked = if dtype.is_integer() || dtype.is_float() || dtype.is_bool() {
        let codes = series.cast(&DataType::Float64)?;
        codes
            .f64()?
            .into_iter()
            .map(|code| code.and_then(organisation_size_label))
            .collect()
    } else {
        log::warn!(
            "replace_organisation_size: column '{}' has non-numeric type {}, every value becomes null",
            column,
            dtype
        );
        StringChunked::full_null(series.name().clone(), series.len())
    };

    let unmapped = labels.null_count() - series.null_count();
    if unmapped > 0 {
        log::debug!(
            "replace_organisation_size: {} value(s) in '{}' had no label",
            unmapped,
            column
        );
    }

    df.with_column(labels.with_name(series.name().clone()).into_series())?;
    Ok(df)
}
