//! Text normalization: the canonical token form ("snake case") and the
//! free-text country field.

use once_cell::sync::Lazy;
use polars::prelude::*;
use regex::Regex;

use crate::config::CleaningConfig;
use crate::error::CleaningResult;
use crate::transformations::selection::{lookup_series, ColumnSelection};

/// Anything that is neither an ASCII word character nor whitespace.
pub(crate) static SPECIAL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s]").expect("valid special-char pattern"));

static SEPARATOR_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_]+").expect("valid separator pattern"));

/// Label used when a location lists more than two comma-separated parts.
pub const MULTIPLE_COUNTRIES: &str = "multiple_countries";

/// Convert a value to its canonical token form.
///
/// Special characters are removed, the text is lowercased and every run of
/// whitespace and underscores becomes a single underscore.
///
/// ```
/// use ransom_clean::transformations::snake_case;
///
/// assert_eq!(snake_case("Hello,  World!"), "hello_world");
/// assert_eq!(snake_case("already__snake"), "already_snake");
/// ```
pub fn snake_case(value: &str) -> String {
    let stripped = SPECIAL_CHARS.replace_all(value, "");
    let lowered = stripped.to_lowercase();
    SEPARATOR_RUNS.replace_all(&lowered, "_").into_owned()
}

/// Normalize a single location value.
///
/// A value with three or more comma-separated parts names several
/// countries. With exactly two parts the last one is taken as the country
/// ("London, United Kingdom").
pub fn clean_country(value: &str) -> String {
    if !value.contains(',') {
        return snake_case(value);
    }

    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() > 2 {
        return MULTIPLE_COUNTRIES.to_string();
    }
    match parts.last() {
        Some(last) => snake_case(last.trim()),
        None => snake_case(value),
    }
}

/// Cast a column to text and rewrite every non-null value with `f`.
///
/// Float NaN is missing, so it stays null instead of becoming `"nan"`.
fn map_text_column<F>(df: &mut DataFrame, series: &Series, f: F) -> CleaningResult<()>
where
    F: Fn(&str) -> String,
{
    let text = if series.dtype().is_float() {
        let values: Float64Chunked = series
            .cast(&DataType::Float64)?
            .f64()?
            .into_iter()
            .map(|v| v.filter(|x| !x.is_nan()))
            .collect();
        values.into_series().cast(&DataType::String)?
    } else {
        series.cast(&DataType::String)?
    };
    let mapped: StringChunked = text.str()?.into_iter().map(|v| v.map(&f)).collect();
    df.with_column(mapped.with_name(series.name().clone()).into_series())?;
    Ok(())
}

/// Convert all values in the given columns to snake case
///
/// Columns that are not present are skipped unless the configuration says
/// otherwise.
///
/// # Example
///
/// ```
/// use polars::prelude::*;
/// use ransom_clean::transformations::value_snake_case;
///
/// let df = df!("sector" => &["Health Care", "Retail & Trade"]).unwrap();
/// let df = value_snake_case(df, ["sector", "not_there"]).unwrap();
/// let sector: Vec<Option<&str>> = df.column("sector").unwrap().str().unwrap().into_iter().collect();
/// assert_eq!(sector, vec![Some("health_care"), Some("retail_trade")]);
/// ```
pub fn value_snake_case(
    df: DataFrame,
    columns: impl Into<ColumnSelection>,
) -> CleaningResult<DataFrame> {
    value_snake_case_with(df, columns, &CleaningConfig::default())
}

/// [`value_snake_case`] with an explicit configuration.
pub fn value_snake_case_with(
    mut df: DataFrame,
    columns: impl Into<ColumnSelection>,
    config: &CleaningConfig,
) -> CleaningResult<DataFrame> {
    let selection = columns.into();
    let present = selection.resolve(&df, config.missing_columns.value_snake_case)?;

    for name in &present {
        let series = df.column(name)?.as_materialized_series().clone();
        map_text_column(&mut df, &series, snake_case)?;
        log::debug!("value_snake_case: normalized column '{}'", name);
    }
    Ok(df)
}

/// Clean up a country column
///
/// The column is skipped when absent unless the configuration says
/// otherwise.
pub fn clean_country_column(df: DataFrame, column: &str) -> CleaningResult<DataFrame> {
    clean_country_column_with(df, column, &CleaningConfig::default())
}

/// [`clean_country_column`] with an explicit configuration.
pub fn clean_country_column_with(
    mut df: DataFrame,
    column: &str,
    config: &CleaningConfig,
) -> CleaningResult<DataFrame> {
    let Some(series) = lookup_series(&df, column, config.missing_columns.clean_country_column)?
    else {
        return Ok(df);
    };

    map_text_column(&mut df, &series, clean_country)?;
    log::debug!("clean_country_column: normalized column '{}'", column);
    Ok(df)
}
