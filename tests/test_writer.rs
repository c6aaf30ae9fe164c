use chrono::NaiveDate;
use district_forecast::projector::ForecastPoint;
use district_forecast::writer::write_forecast;
use tempfile::TempDir;

fn point(month: NaiveDate, value: u64) -> ForecastPoint {
    ForecastPoint {
        state: "KERALA".to_string(),
        district: "PALAKKAD".to_string(),
        month,
        forecast_value: value,
    }
}

#[test]
fn test_write_forecast_table() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("enrolment_forecast.csv");

    let points = vec![
        point(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), 525),
        point(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(), 551),
    ];
    write_forecast(&path, &points).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "state,district,month,forecast_value");
    assert_eq!(lines[1], "KERALA,PALAKKAD,2025-01-01,525");
    assert_eq!(lines[2], "KERALA,PALAKKAD,2025-02-01,551");
}

#[test]
fn test_empty_forecast_writes_header_only() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("empty_forecast.csv");

    write_forecast(&path, &[]).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines, vec!["state,district,month,forecast_value"]);
}
