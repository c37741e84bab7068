use std::collections::HashSet;
use std::path::Path;

use crate::{AsvcleanError, Result};

/// Identifier column shared by the sequence, taxonomy, and species tables.
pub const ID_COLUMN: &str = "ASV_ID";

fn table_err(path: &Path, e: impl std::fmt::Display) -> AsvcleanError {
    AsvcleanError::Table(format!("{}: {}", path.display(), e))
}

/// Copy a tab-separated table, dropping every row whose `ASV_ID` is in
/// `rejected`. The header and all retained rows pass through in their
/// original order with columns untouched. Returns the number of rows dropped.
pub fn filter_table<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    rejected: &HashSet<String>,
) -> Result<usize> {
    let input = input.as_ref();
    let output = output.as_ref();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_path(input)
        .map_err(|e| table_err(input, e))?;

    let headers = reader.headers().map_err(|e| table_err(input, e))?.clone();
    let id_idx = headers.iter().position(|h| h == ID_COLUMN).ok_or_else(|| {
        table_err(input, format!("missing required column '{}'", ID_COLUMN))
    })?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(output)
        .map_err(|e| table_err(output, e))?;

    writer
        .write_record(&headers)
        .map_err(|e| table_err(output, e))?;

    let mut dropped = 0;
    for record in reader.records() {
        let record = record.map_err(|e| table_err(input, e))?;
        if record.get(id_idx).is_some_and(|id| rejected.contains(id)) {
            dropped += 1;
            continue;
        }
        writer
            .write_record(&record)
            .map_err(|e| table_err(output, e))?;
    }

    writer.flush()?;
    Ok(dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "ASV_ID\tS01\tS02\nASV_1\t10\t0\nASV_2\t3\t7\nASV_3\t0\t22\n";

    fn write_input(contents: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), contents).unwrap();
        file
    }

    #[test]
    fn test_rejected_rows_are_dropped() {
        let input = write_input(TABLE);
        let output = tempfile::NamedTempFile::new().unwrap();
        let rejected = HashSet::from(["ASV_2".to_string()]);

        let dropped = filter_table(input.path(), output.path(), &rejected).unwrap();
        assert_eq!(dropped, 1);

        let result = std::fs::read_to_string(output.path()).unwrap();
        assert_eq!(result, "ASV_ID\tS01\tS02\nASV_1\t10\t0\nASV_3\t0\t22\n");
    }

    #[test]
    fn test_empty_rejected_set_passes_everything_through() {
        let input = write_input(TABLE);
        let output = tempfile::NamedTempFile::new().unwrap();

        let dropped = filter_table(input.path(), output.path(), &HashSet::new()).unwrap();
        assert_eq!(dropped, 0);

        let result = std::fs::read_to_string(output.path()).unwrap();
        assert_eq!(result, TABLE);
    }

    #[test]
    fn test_id_column_position_does_not_matter() {
        let input = write_input("Kingdom\tASV_ID\nBacteria\tASV_1\nArchaea\tASV_2\n");
        let output = tempfile::NamedTempFile::new().unwrap();
        let rejected = HashSet::from(["ASV_1".to_string()]);

        filter_table(input.path(), output.path(), &rejected).unwrap();

        let result = std::fs::read_to_string(output.path()).unwrap();
        assert_eq!(result, "Kingdom\tASV_ID\nArchaea\tASV_2\n");
    }

    #[test]
    fn test_missing_id_column_is_fatal() {
        let input = write_input("OTU\tS01\nOTU_1\t5\n");
        let output = tempfile::NamedTempFile::new().unwrap();

        match filter_table(input.path(), output.path(), &HashSet::new()) {
            Err(AsvcleanError::Table(msg)) => assert!(msg.contains("ASV_ID")),
            other => panic!("expected table error, got {:?}", other),
        }
    }

    #[test]
    fn test_ragged_row_is_fatal() {
        let input = write_input("ASV_ID\tS01\nASV_1\t5\tunexpected\n");
        let output = tempfile::NamedTempFile::new().unwrap();

        assert!(matches!(
            filter_table(input.path(), output.path(), &HashSet::new()),
            Err(AsvcleanError::Table(_))
        ));
    }
}
