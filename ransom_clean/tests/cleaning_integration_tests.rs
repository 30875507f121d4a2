//! Integration tests for the cleaning transforms and pipeline.

use polars::prelude::*;
use proptest::prelude::*;
use ransom_clean::preprocessing::CleaningPipeline;
use ransom_clean::transformations::{
    clean_column_names, clean_country_column, convert_ransom_cost_to_numeric, drop_columns,
    drop_nan_rows, ensure_numeric_finite, replace_organisation_size, value_snake_case,
};
use ransom_clean::{CleaningConfig, CleaningError, MissingColumnPolicy};

fn acme_df() -> DataFrame {
    df!(
        "Company Name" => &["Acme Corp"],
        "Org Size" => &[10i64],
        "Location" => &["Germany"],
        "Cost ($M)" => &["1.2"],
    )
    .unwrap()
}

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names().iter().map(|n| n.to_string()).collect()
}

fn assert_acme_row(df: &DataFrame) {
    assert_eq!(
        column_names(df),
        vec!["company_name", "org_size", "location", "cost_m"]
    );
    assert_eq!(df.height(), 1);
    assert_eq!(df.column("company_name").unwrap().str().unwrap().get(0), Some("Acme Corp"));
    assert_eq!(df.column("org_size").unwrap().str().unwrap().get(0), Some("medium"));
    assert_eq!(df.column("location").unwrap().str().unwrap().get(0), Some("germany"));
    assert_eq!(df.column("cost_m").unwrap().f64().unwrap().get(0), Some(1_200_000.0));
}

#[test]
fn test_end_to_end_with_free_functions() {
    let df = clean_column_names(acme_df()).unwrap();
    let df = replace_organisation_size(df, "org_size").unwrap();
    let df = clean_country_column(df, "location").unwrap();
    let df = convert_ransom_cost_to_numeric(df, "cost_m").unwrap();

    assert_acme_row(&df);
}

#[test]
fn test_end_to_end_with_pipeline() {
    let pipeline = CleaningPipeline::ransom_recipe("org_size", "location", "cost_m");
    let outcome = pipeline.run(acme_df()).unwrap();

    assert_acme_row(&outcome.dataframe);
    assert_eq!(outcome.report.rows_dropped(), 0);
    assert_eq!(
        outcome.report.columns_before,
        vec!["Company Name", "Org Size", "Location", "Cost ($M)"]
    );
}

/// Absent columns are skipped by the value normalizers but fail the
/// structural operations. Changing any default here is a visible choice.
#[test]
fn test_missing_column_policy_divergence() {
    let df = df!("present" => &["x"]).unwrap();

    // Lenient by default
    assert!(value_snake_case(df.clone(), "absent").is_ok());
    assert!(clean_country_column(df.clone(), "absent").is_ok());

    // Strict by default
    let strict = [
        drop_nan_rows(df.clone(), "absent"),
        drop_columns(df.clone(), "absent"),
        replace_organisation_size(df.clone(), "absent"),
        convert_ransom_cost_to_numeric(df.clone(), "absent"),
        ensure_numeric_finite(df.clone(), "absent"),
    ];
    for result in strict {
        match result {
            Err(CleaningError::ColumnNotFound(name)) => assert_eq!(name, "absent"),
            other => panic!("expected ColumnNotFound, got {:?}", other.map(|df| df.shape())),
        }
    }

    let defaults = CleaningConfig::default().missing_columns;
    assert_eq!(defaults.value_snake_case, MissingColumnPolicy::Skip);
    assert_eq!(defaults.clean_country_column, MissingColumnPolicy::Skip);
    assert_eq!(defaults.drop_nan_rows, MissingColumnPolicy::Fail);
    assert_eq!(defaults.drop_columns, MissingColumnPolicy::Fail);
    assert_eq!(defaults.replace_organisation_size, MissingColumnPolicy::Fail);
}

#[test]
fn test_transforms_preserve_row_count_and_order() {
    let df = df!(
        "location" => &["Brazil", "Peru", "Chile"],
        "cost" => &["1", "x", "3"],
        "size" => &[1i64, 2, 300],
    )
    .unwrap();

    let df = clean_country_column(df, "location").unwrap();
    let df = convert_ransom_cost_to_numeric(df, "cost").unwrap();
    let df = replace_organisation_size(df, "size").unwrap();
    assert_eq!(df.height(), 3);
    assert_eq!(column_names(&df), vec!["location", "cost", "size"]);

    let locations: Vec<Option<&str>> =
        df.column("location").unwrap().str().unwrap().into_iter().collect();
    assert_eq!(locations, vec![Some("brazil"), Some("peru"), Some("chile")]);
}

proptest! {
    #[test]
    fn prop_drop_nan_rows_only_removes_rows_with_nulls(
        values in proptest::collection::vec(proptest::option::of(-1000i64..1000), 0..50)
    ) {
        let df = df!("v" => values.clone()).unwrap();
        let cleaned = drop_nan_rows(df, "v").unwrap();

        prop_assert!(cleaned.height() <= values.len());
        prop_assert_eq!(cleaned.column("v").unwrap().null_count(), 0);

        let kept: Vec<Option<i64>> = cleaned.column("v").unwrap().i64().unwrap().into_iter().collect();
        let expected: Vec<Option<i64>> = values.into_iter().filter(|v| v.is_some()).collect();
        prop_assert_eq!(kept, expected);
    }
}
