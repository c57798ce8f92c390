//! 물가상승률 표 로드/검증 테스트.
use salary_inflation::inflation::{RateTable, RateTableEntry, RateTableError};
use std::fs;

#[test]
fn unsorted_input_is_ordered_by_year() {
    let t = RateTable::from_entries([
        RateTableEntry { year: 2012, rate: 6.6 },
        RateTableEntry { year: 2010, rate: 8.8 },
        RateTableEntry { year: 2011, rate: 6.1 },
    ])
    .unwrap();
    assert_eq!(t.years(), vec![2010, 2011, 2012]);
    assert_eq!((t.min_year(), t.max_year()), (2010, 2012));
    assert_eq!(t.rate_for(2011), Some(6.1));
    assert_eq!(t.rate_for(2013), None);
}

#[test]
fn duplicate_years_are_rejected() {
    let err = RateTable::from_entries([
        RateTableEntry { year: 2010, rate: 8.8 },
        RateTableEntry { year: 2010, rate: 9.0 },
    ])
    .unwrap_err();
    assert!(matches!(err, RateTableError::DuplicateYear(2010)));
}

#[test]
fn non_finite_rate_is_rejected() {
    let err = RateTable::from_entries([RateTableEntry {
        year: 2010,
        rate: f64::NAN,
    }])
    .unwrap_err();
    assert!(matches!(err, RateTableError::InvalidRate { year: 2010 }));
}

#[test]
fn rate_wiping_out_prices_is_rejected() {
    for rate in [-100.0, -150.0] {
        let err = RateTable::from_entries([RateTableEntry { year: 2010, rate }]).unwrap_err();
        assert!(matches!(err, RateTableError::InvalidRate { year: 2010 }), "{rate}");
    }
    let src = "[[rates]]\nyear = 2009\nrate = 8.8\n\n[[rates]]\nyear = 2010\nrate = -100.0\n";
    assert!(matches!(
        RateTable::from_toml_str(src),
        Err(RateTableError::InvalidRate { year: 2010 })
    ));
    let deflation = RateTable::from_entries([RateTableEntry { year: 2010, rate: -99.5 }]).unwrap();
    assert_eq!(deflation.rate_for(2010), Some(-99.5));
}

#[test]
fn toml_text_is_parsed() {
    let src = r#"
[[rates]]
year = 2021
rate = 8.4

[[rates]]
year = 2020
rate = 4.9
"#;
    let t = RateTable::from_toml_str(src).unwrap();
    assert_eq!(t.len(), 2);
    assert_eq!(t.entries()[0], RateTableEntry { year: 2020, rate: 4.9 });
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = RateTable::from_toml_str("[[rates]]\nyear = \"x\"").unwrap_err();
    assert!(matches!(err, RateTableError::Parse(_)));
}

#[test]
fn load_reads_file_and_reports_missing() {
    let dir = std::env::temp_dir().join(format!("salary_inflation_rates_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("rates.toml");
    fs::write(&path, "[[rates]]\nyear = 1999\nrate = 36.5\n").unwrap();
    let t = RateTable::load(&path).unwrap();
    assert_eq!(t.rate_for(1999), Some(36.5));

    let err = RateTable::load(dir.join("absent.toml")).unwrap_err();
    assert!(matches!(err, RateTableError::Io(_)));
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn bundled_table_covers_recent_years() {
    let t = RateTable::bundled().unwrap();
    assert_eq!(t.min_year(), 2000);
    assert_eq!(t.max_year(), 2024);
    assert_eq!(t.rate_for(2022), Some(11.9));
}
