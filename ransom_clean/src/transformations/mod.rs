//! Column-wise cleaning transforms.
//!
//! Every transform takes a DataFrame by value and returns the cleaned
//! DataFrame. Each one has a `_with` variant taking a
//! [`CleaningConfig`](crate::config::CleaningConfig) to override what
//! happens when a referenced column is absent.
//!
//! # Modules
//!
//! - [`cleaning`]: Drop rows with missing values
//! - [`text`]: Snake-case values and normalize the country field
//! - [`columns`]: Clean column names and drop columns
//! - [`categorical`]: Recode organisation-size codes to labels
//! - [`numeric`]: Coerce cost columns to finite numbers
//!
//! # Example
//!
//! ```
//! use polars::prelude::*;
//! use ransom_clean::transformations::{clean_column_names, clean_country_column};
//!
//! # fn example() -> ransom_clean::CleaningResult<()> {
//! let df = df!("Location" => &["London, United Kingdom"])?;
//! let df = clean_column_names(df)?;
//! let df = clean_country_column(df, "location")?;
//! assert_eq!(df.column("location")?.str()?.get(0), Some("united_kingdom"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod categorical;
pub mod cleaning;
pub mod columns;
pub mod numeric;
pub mod selection;
pub mod text;

pub use categorical::{
    organisation_size_label, replace_organisation_size, replace_organisation_size_with,
    ORGANISATION_SIZE_LABELS,
};
pub use cleaning::{drop_nan_rows, drop_nan_rows_with};
pub use columns::{
    clean_column_name, clean_column_names, drop_columns, drop_columns_with,
    drop_columns_with_url,
};
pub use numeric::{
    coerce_numeric, convert_ransom_cost_to_numeric, convert_ransom_cost_to_numeric_with,
    ensure_numeric_finite, ensure_numeric_finite_with, parse_numeric, COST_UNIT_MULTIPLIER,
};
pub use selection::ColumnSelection;
pub use text::{
    clean_country, clean_country_column, clean_country_column_with, snake_case,
    value_snake_case, value_snake_case_with, MULTIPLE_COUNTRIES,
};
