//! Unit tests for the dataset loader, exercising the file path end.

use crate::helpers::{init_tracing, sample_csv};
use anyhow::Result;
use carbonboard::data::{load_dataset, DataError};
use std::io::Write;

#[test]
fn test_load_from_file() -> Result<()> {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "{}", sample_csv())?;

    let dataset = load_dataset(file.path())?;

    assert_eq!(dataset.len(), 7);
    assert_eq!(dataset.countries(), vec!["World", "Qatar", "Aruba"]);

    let world_2021 = dataset
        .records()
        .iter()
        .find(|r| r.country == "World" && r.year == 2021)
        .expect("World 2021 row");
    assert_eq!(world_2021.co2_per_capita, Some(4.7));
    assert_eq!(world_2021.coal, Some(14979.6));
    Ok(())
}

#[test]
fn test_missing_file_is_fatal() {
    let err = load_dataset(std::path::Path::new("/no/such/owid-co2-data.csv")).unwrap_err();
    assert!(matches!(err, DataError::Io(_)));
    assert!(!err.is_recoverable());
}

#[test]
fn test_schema_drift_is_fatal() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "country,year,total_co2\nWorld,2021,37000.0")?;

    match load_dataset(file.path()) {
        Err(DataError::MissingColumns { columns }) => {
            assert!(columns.contains(&"co2_per_capita".to_string()));
            assert!(columns.contains(&"coal_co2".to_string()));
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
    Ok(())
}
