use polars::prelude::*;

use crate::config::CleaningConfig;
use crate::error::CleaningResult;
use crate::transformations::selection::ColumnSelection;

/// Remove rows with a missing value in any of the given columns
///
/// Null counts as missing everywhere; NaN also counts in float columns.
///
/// # Example
///
/// ```
/// use polars::prelude::*;
/// use ransom_clean::transformations::drop_nan_rows;
///
/// let df = df!("description" => &[Some("phishing"), None]).unwrap();
/// let cleaned = drop_nan_rows(df, "description").unwrap();
/// assert_eq!(cleaned.height(), 1);
/// ```
pub fn drop_nan_rows(
    df: DataFrame,
    columns: impl Into<ColumnSelection>,
) -> CleaningResult<DataFrame> {
    drop_nan_rows_with(df, columns, &CleaningConfig::default())
}

/// [`drop_nan_rows`] with an explicit configuration.
pub fn drop_nan_rows_with(
    df: DataFrame,
    columns: impl Into<ColumnSelection>,
    config: &CleaningConfig,
) -> CleaningResult<DataFrame> {
    let selection = columns.into();
    let present = selection.resolve(&df, config.missing_columns.drop_nan_rows)?;
    if present.is_empty() {
        return Ok(df);
    }

    let mut mask = BooleanChunked::full("mask".into(), true, df.height());
    for name in &present {
        let series = df.column(name)?.as_materialized_series();
        mask = &mask & &present_mask(series)?;
    }

    let before = df.height();
    let filtered = df.filter(&mask)?;
    log::debug!(
        "drop_nan_rows: removed {} of {} rows (checked {:?})",
        before - filtered.height(),
        before,
        present
    );
    Ok(filtered)
}

/// True where a cell holds a value: not null and, for floats, not NaN.
fn present_mask(series: &Series) -> CleaningResult<BooleanChunked> {
    if !series.dtype().is_float() {
        return Ok(series.is_not_null());
    }
    let values = series.cast(&DataType::Float64)?;
    Ok(values
        .f64()?
        .into_iter()
        .map(|v| v.is_some_and(|x| !x.is_nan()))
        .collect())
}
