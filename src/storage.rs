use crate::errors::AppError;
use crate::models::Record;
use chrono::NaiveDate;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("HEALTH_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/records.json"))
}

/// Reads the persisted record array and returns it sorted ascending by date.
///
/// Fail-soft: a missing file is an empty collection, and an unreadable or
/// unparseable file is logged and also treated as empty. Callers never see
/// a storage read error.
pub async fn load_records(path: &Path) -> Vec<Record> {
    match fs::read(path).await {
        Ok(bytes) => decode_records(&bytes),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read data file: {err}");
            Vec::new()
        }
    }
}

fn decode_records(bytes: &[u8]) -> Vec<Record> {
    match serde_json::from_slice::<Vec<Record>>(bytes) {
        Ok(mut records) => {
            sort_records(&mut records);
            records
        }
        Err(err) => {
            error!("failed to parse data file: {err}");
            Vec::new()
        }
    }
}

/// Sorts ascending by date. Sorting on every load is the invariant, not an
/// optimization: records may have been appended out of calendar order.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by_cached_key(|record| date_key(&record.date));
}

/// Sorted copy for readers, so nobody holds the live collection.
pub fn sorted_records(records: &[Record]) -> Vec<Record> {
    let mut copy = records.to_vec();
    sort_records(&mut copy);
    copy
}

// Keys that parse as calendar dates order chronologically; anything else
// falls back to lexicographic order ahead of them.
fn date_key(raw: &str) -> (Option<NaiveDate>, String) {
    (
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(),
        raw.to_string(),
    )
}

/// Replaces the record sharing `record.date` at its original position, or
/// appends when the date is new.
pub fn upsert_record(records: &mut Vec<Record>, record: Record) {
    match records.iter().position(|existing| existing.date == record.date) {
        Some(index) => records[index] = record,
        None => records.push(record),
    }
}

/// Rewrites the whole collection. A failure here is fatal to the triggering
/// operation only; there is no retry.
pub async fn persist_records(path: &Path, records: &[Record]) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(records)?;
    fs::write(path, payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, weight: f64) -> Record {
        Record {
            date: date.to_string(),
            weight,
            water: 2.0,
            sleep: 7.0,
        }
    }

    #[test]
    fn decode_normalizes_garbage_to_empty() {
        assert!(decode_records(b"not json at all").is_empty());
        assert!(decode_records(b"{\"records\": 3}").is_empty());
        assert!(decode_records(b"[]").is_empty());
    }

    #[test]
    fn decode_sorts_by_date() {
        let records = decode_records(
            br#"[
                {"date": "2026-02-10", "weight": 71.0, "water": 2.0, "sleep": 7.0},
                {"date": "2026-01-05", "weight": 72.0, "water": 2.0, "sleep": 7.0},
                {"date": "2026-01-30", "weight": 70.5, "water": 2.0, "sleep": 7.0}
            ]"#,
        );
        let dates: Vec<&str> = records.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["2026-01-05", "2026-01-30", "2026-02-10"]);
    }

    #[test]
    fn sorted_records_leaves_input_untouched() {
        let original = vec![record("2026-03-02", 70.0), record("2026-03-01", 71.0)];
        let sorted = sorted_records(&original);
        assert_eq!(sorted[0].date, "2026-03-01");
        assert_eq!(original[0].date, "2026-03-02");
    }

    #[test]
    fn upsert_appends_new_date() {
        let mut records = vec![record("2026-03-01", 71.0)];
        upsert_record(&mut records, record("2026-03-02", 70.5));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn upsert_replaces_in_place_without_growing() {
        let mut records = vec![
            record("2026-03-01", 71.0),
            record("2026-03-02", 70.5),
            record("2026-03-03", 70.2),
        ];
        upsert_record(&mut records, record("2026-03-02", 69.8));
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].date, "2026-03-02");
        assert_eq!(records[1].weight, 69.8);
    }

    #[test]
    fn upsert_is_idempotent() {
        let mut once = vec![record("2026-03-01", 71.0)];
        upsert_record(&mut once, record("2026-03-02", 70.5));

        let mut twice = vec![record("2026-03-01", 71.0)];
        upsert_record(&mut twice, record("2026-03-02", 70.5));
        upsert_record(&mut twice, record("2026-03-02", 70.5));

        assert_eq!(once, twice);
    }

    #[test]
    fn sort_is_stable_for_mixed_insert_order() {
        let mut records = vec![
            record("2026-03-10", 70.0),
            record("2026-02-28", 71.5),
            record("2026-03-05", 70.8),
        ];
        sort_records(&mut records);
        let dates: Vec<&str> = records.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["2026-02-28", "2026-03-05", "2026-03-10"]);
    }
}
