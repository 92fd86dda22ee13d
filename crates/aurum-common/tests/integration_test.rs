//! Shared-type integration tests

use aurum_common::{DashboardError, PriceRecord, ReserveRecord};
use chrono::NaiveDate;

#[test]
fn error_messages_name_their_subjects() {
    let err = DashboardError::source_missing("headlines", "/data/headlines.csv");
    assert_eq!(
        err.to_string(),
        "Missing source 'headlines': /data/headlines.csv"
    );

    let err = DashboardError::schema("investment", vec!["region".into(), "year".into()]);
    assert_eq!(
        err.to_string(),
        "Schema violation in 'investment': missing required column(s): region, year"
    );
}

#[test]
fn records_roundtrip_through_serde() {
    let record = PriceRecord {
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        price: 2063.7,
    };
    let yaml = serde_yaml::to_string(&record).unwrap();
    let back: PriceRecord = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, record);

    let reserve = ReserveRecord {
        country: "United States".to_string(),
        tonnes: 8133.5,
    };
    let yaml = serde_yaml::to_string(&reserve).unwrap();
    let back: ReserveRecord = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, reserve);
}
