use chrono::NaiveDate;
use district_forecast::data::DataLoader;
use district_forecast::error::ForecastError;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_feature_table() {
    let file = write_csv(
        "state,district,month,total_enrolment\n\
         Kerala,Palakkad,2024-01-01,100\n\
         Kerala,Palakkad,2024-02-01,120\n",
    );

    let rows = DataLoader::from_csv(file.path(), "total_enrolment").unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].geography.state, "KERALA");
    assert_eq!(rows[0].month, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(rows[1].value, 120.0);
}

#[test]
fn test_missing_value_column_is_schema_error() {
    let file = write_csv(
        "state,district,month,total_enrolment\n\
         Kerala,Palakkad,2024-01-01,100\n",
    );

    let result = DataLoader::from_csv(file.path(), "total_updates");
    assert!(matches!(result, Err(ForecastError::SchemaError(_))));
}

#[test]
fn test_unparseable_month_rows_are_dropped() {
    let file = write_csv(
        "state,district,month,total_enrolment\n\
         Kerala,Palakkad,not-a-date,100\n\
         Kerala,Palakkad,,90\n\
         Kerala,Palakkad,2024-02-01,120\n",
    );

    let rows = DataLoader::from_csv(file.path(), "total_enrolment").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].value, 120.0);
}

#[test]
fn test_invalid_value_rows_are_dropped() {
    let file = write_csv(
        "state,district,month,total_enrolment\n\
         Kerala,Palakkad,2024-01-01,abc\n\
         Kerala,Palakkad,2024-02-01,-5\n\
         Kerala,Palakkad,2024-03-01,130\n",
    );

    let rows = DataLoader::from_csv(file.path(), "total_enrolment").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].value, 130.0);
}

#[test]
fn test_month_formats_and_normalization() {
    // Raw-feed DD-MM-YYYY dates and mid-month days both land on the first
    let file = write_csv(
        "state,district,month,total_enrolment\n\
         Kerala,Palakkad,01-03-2025,100\n\
         Kerala,Palakkad,2025-04-15,110\n",
    );

    let rows = DataLoader::from_csv(file.path(), "total_enrolment").unwrap();
    assert_eq!(rows[0].month, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    assert_eq!(rows[1].month, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
}

#[test]
fn test_header_only_table_is_valid_and_empty() {
    let file = write_csv("state,district,month,total_enrolment\n");
    let rows = DataLoader::from_csv(file.path(), "total_enrolment").unwrap();
    assert!(rows.is_empty());
}
