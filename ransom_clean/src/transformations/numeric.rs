//! Numeric coercion for cost-like columns.
//!
//! Coercion never fails on a value: anything that does not parse becomes
//! null, and NaN is treated as missing.

use polars::prelude::*;

use crate::config::{CleaningConfig, NonFinitePolicy};
use crate::error::CleaningResult;
use crate::transformations::selection::lookup_series;

/// Ransom costs are recorded in millions.
pub const COST_UNIT_MULTIPLIER: f64 = 1_000_000.0;

/// Parse a text cell as a number. Surrounding whitespace is ignored.
///
/// ```
/// use ransom_clean::transformations::parse_numeric;
///
/// assert_eq!(parse_numeric(" 2.5 "), Some(2.5));
/// assert_eq!(parse_numeric("n/a"), None);
/// assert_eq!(parse_numeric("inf"), Some(f64::INFINITY));
/// ```
pub fn parse_numeric(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
}

/// Coerce a series to `Float64`.
///
/// Numeric and boolean columns are cast, text columns are parsed cell by
/// cell, and columns of any other type become entirely null.
pub fn coerce_numeric(series: &Series) -> CleaningResult<Series> {
    let dtype = series.dtype();
    let values: Float64Chunked = if dtype.is_integer() || dtype.is_float() || dtype.is_bool() {
        let cast = series.cast(&DataType::Float64)?;
        cast.f64()?
            .into_iter()
            .map(|v| v.filter(|x| !x.is_nan()))
            .collect()
    } else if dtype == &DataType::String {
        series
            .str()?
            .into_iter()
            .map(|v| v.and_then(parse_numeric))
            .collect()
    } else {
        Float64Chunked::full_null(series.name().clone(), series.len())
    };

    let coerced = values.null_count().saturating_sub(series.null_count());
    if coerced > 0 {
        log::debug!(
            "coerce_numeric: {} value(s) in '{}' could not be parsed",
            coerced,
            series.name()
        );
    }
    Ok(values.with_name(series.name().clone()).into_series())
}

/// Convert a ransom-cost column to numbers and scale it from millions to
/// base currency units.
///
/// # Example
///
/// ```
/// use polars::prelude::*;
/// use ransom_clean::transformations::convert_ransom_cost_to_numeric;
///
/// let df = df!("ransom_cost" => &["2.5", "n/a"]).unwrap();
/// let df = convert_ransom_cost_to_numeric(df, "ransom_cost").unwrap();
/// let cost = df.column("ransom_cost").unwrap().f64().unwrap();
/// assert_eq!(cost.get(0), Some(2_500_000.0));
/// assert_eq!(cost.get(1), None);
/// ```
pub fn convert_ransom_cost_to_numeric(df: DataFrame, column: &str) -> CleaningResult<DataFrame> {
    convert_ransom_cost_to_numeric_with(df, column, &CleaningConfig::default())
}

/// [`convert_ransom_cost_to_numeric`] with an explicit configuration.
pub fn convert_ransom_cost_to_numeric_with(
    mut df: DataFrame,
    column: &str,
    config: &CleaningConfig,
) -> CleaningResult<DataFrame> {
    let Some(series) = lookup_series(
        &df,
        column,
        config.missing_columns.convert_ransom_cost_to_numeric,
    )?
    else {
        return Ok(df);
    };

    let coerced = coerce_numeric(&series)?;
    let scaled: Float64Chunked = coerced
        .f64()?
        .into_iter()
        .map(|v| v.map(|x| x * COST_UNIT_MULTIPLIER))
        .collect();

    df.with_column(scaled.with_name(series.name().clone()).into_series())?;
    Ok(df)
}

/// Make sure a column is numeric.
///
/// The values are coerced like [`coerce_numeric`]. Infinite values are
/// counted and, with the default [`NonFinitePolicy::Keep`], left in place.
pub fn ensure_numeric_finite(df: DataFrame, column: &str) -> CleaningResult<DataFrame> {
    ensure_numeric_finite_with(df, column, &CleaningConfig::default())
}

/// [`ensure_numeric_finite`] with an explicit configuration.
///
/// With [`NonFinitePolicy::Null`] infinite values are replaced with null.
pub fn ensure_numeric_finite_with(
    mut df: DataFrame,
    column: &str,
    config: &CleaningConfig,
) -> CleaningResult<DataFrame> {
    let Some(series) = lookup_series(&df, column, config.missing_columns.ensure_numeric_finite)?
    else {
        return Ok(df);
    };

    let coerced = coerce_numeric(&series)?;
    let values = coerced.f64()?;
    let non_finite = values
        .into_iter()
        .flatten()
        .filter(|x| !x.is_finite())
        .count();

    let result = match config.non_finite {
        NonFinitePolicy::Keep => {
            if non_finite > 0 {
                log::debug!(
                    "ensure_numeric_finite: '{}' keeps {} non-finite value(s)",
                    column,
                    non_finite
                );
            }
            coerced.clone()
        }
        NonFinitePolicy::Null => {
            if non_finite > 0 {
                log::debug!(
                    "ensure_numeric_finite: nulling {} non-finite value(s) in '{}'",
                    non_finite,
                    column
                );
            }
            let nulled: Float64Chunked = values
                .into_iter()
                .map(|v| v.filter(|x| x.is_finite()))
                .collect();
            nulled.with_name(series.name().clone()).into_series()
        }
    };

    df.with_column(result)?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MissingColumnPolicies, MissingColumnPolicy};
    use crate::error::CleaningError;

    fn floats(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
        df.column(name).unwrap().f64().unwrap().into_iter().collect()
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("2.5"), Some(2.5));
        assert_eq!(parse_numeric("-3"), Some(-3.0));
        assert_eq!(parse_numeric("1e3"), Some(1000.0));
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric("$5"), None);
        assert_eq!(parse_numeric("-inf"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_coerce_integer_column() {
        let series = Series::new("n".into(), &[Some(1i64), None, Some(3)]);
        let coerced = coerce_numeric(&series).unwrap();
        assert_eq!(coerced.dtype(), &DataType::Float64);
        let values: Vec<Option<f64>> = coerced.f64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(1.0), None, Some(3.0)]);
    }

    #[test]
    fn test_coerce_float_nan_is_missing() {
        let series = Series::new("n".into(), &[1.5, f64::NAN]);
        let coerced = coerce_numeric(&series).unwrap();
        let values: Vec<Option<f64>> = coerced.f64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(1.5), None]);
    }

    #[test]
    fn test_convert_ransom_cost() {
        let df = df!("ransom_cost" => &[Some("2.5"), Some("n/a"), None, Some(" 0.75 ")]).unwrap();
        let df = convert_ransom_cost_to_numeric(df, "ransom_cost").unwrap();
        assert_eq!(
            floats(&df, "ransom_cost"),
            vec![Some(2_500_000.0), None, None, Some(750_000.0)]
        );
    }

    #[test]
    fn test_convert_numeric_input() {
        let df = df!("ransom_cost" => &[Some(4i64), None]).unwrap();
        let df = convert_ransom_cost_to_numeric(df, "ransom_cost").unwrap();
        assert_eq!(floats(&df, "ransom_cost"), vec![Some(4_000_000.0), None]);
    }

    #[test]
    fn test_convert_missing_column() {
        let df = df!("cost" => &[1.0]).unwrap();
        let err = convert_ransom_cost_to_numeric(df, "ransom_cost").unwrap_err();
        assert!(matches!(err, CleaningError::ColumnNotFound(_)));
    }

    #[test]
    fn test_ensure_numeric_finite_keeps_infinity_by_default() {
        let df = df!("value" => &["1", "inf", "oops", "-inf"]).unwrap();
        let df = ensure_numeric_finite(df, "value").unwrap();
        assert_eq!(
            floats(&df, "value"),
            vec![Some(1.0), Some(f64::INFINITY), None, Some(f64::NEG_INFINITY)]
        );
    }

    #[test]
    fn test_ensure_numeric_finite_null_policy() {
        let config = CleaningConfig {
            non_finite: NonFinitePolicy::Null,
            ..Default::default()
        };
        let df = df!("value" => &[1.0, f64::INFINITY, 2.0]).unwrap();
        let df = ensure_numeric_finite_with(df, "value", &config).unwrap();
        assert_eq!(floats(&df, "value"), vec![Some(1.0), None, Some(2.0)]);
    }

    #[test]
    fn test_ensure_numeric_finite_missing_column() {
        let df = df!("value" => &[1.0]).unwrap();
        assert!(ensure_numeric_finite(df.clone(), "other").is_err());

        let config = CleaningConfig {
            missing_columns: MissingColumnPolicies::uniform(MissingColumnPolicy::Skip),
            ..Default::default()
        };
        let df = ensure_numeric_finite_with(df, "other", &config).unwrap();
        assert_eq!(floats(&df, "value"), vec![Some(1.0)]);
    }
}
