//! # Flat-File History Persistence
//!
//! Row-oriented (CSV) export and import of one calculator's history.
//! Saves are atomic: rows are written to a sibling `.tmp` file which is
//! renamed over the target, so a crash mid-write never leaves a truncated
//! history behind.
//!
//! Column layout: `sequence`, `recorded_at`, one column per declared
//! input field (spec order, blank when an optional field was omitted),
//! then one column per output field in first-appearance order. On load,
//! the spec's declared field names decide which columns are inputs;
//! everything else is an output, parsed back as a number when it parses
//! and kept as text otherwise.
//!
//! The slope-converter page is the one caller that persists by default
//! (its `slope_history.csv`); the UG-27 page uses the same rows for its
//! export action.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::errors::{CalcError, CalcResult};
use crate::formula::{FormulaSpec, InputRecord, OutputRecord};
use crate::history::HistoryEntry;

const SEQUENCE_COLUMN: &str = "sequence";
const RECORDED_AT_COLUMN: &str = "recorded_at";

/// Write the full history for one calculator, overwriting any existing
/// file.
pub fn save_history(spec: &FormulaSpec, path: &Path, entries: &[HistoryEntry]) -> CalcResult<()> {
    let output_columns = output_columns(entries);

    // Atomic overwrite: rows go to a temp file in the same directory,
    // which is renamed over the target once fully written.
    let tmp_path = path.with_extension("tmp");
    let mut writer =
        csv::Writer::from_path(&tmp_path).map_err(|e| csv_error("create", &tmp_path, e))?;

    let mut header: Vec<&str> = vec![SEQUENCE_COLUMN, RECORDED_AT_COLUMN];
    header.extend(spec.fields.iter().map(|f| f.name));
    header.extend(output_columns.iter().map(String::as_str));
    writer
        .write_record(&header)
        .map_err(|e| csv_error("write header", path, e))?;

    for entry in entries {
        let mut row: Vec<String> = Vec::with_capacity(header.len());
        row.push(entry.sequence.to_string());
        row.push(entry.recorded_at.to_rfc3339());
        for field in &spec.fields {
            row.push(
                entry
                    .inputs
                    .find(field.name)
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
            );
        }
        for column in &output_columns {
            row.push(
                entry
                    .outputs
                    .get(column)
                    .map(|v| v.to_string())
                    .unwrap_or_default(),
            );
        }
        writer
            .write_record(&row)
            .map_err(|e| csv_error("write row", path, e))?;
    }

    writer
        .flush()
        .map_err(|e| csv_error("flush", &tmp_path, e))?;
    drop(writer);

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Load a previously saved history. A missing file is not an error; the
/// caller decides whether to start empty (see `Session::with_slope_log`).
pub fn load_history(spec: &FormulaSpec, path: &Path) -> CalcResult<Vec<HistoryEntry>> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| csv_error("open", path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| csv_error("read header", path, e))?
        .clone();

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error("read row", path, e))?;

        let mut sequence = 0u64;
        let mut recorded_at = Utc::now();
        let mut inputs = InputRecord::new();
        let mut outputs = OutputRecord::new();

        for (name, cell) in headers.iter().zip(record.iter()) {
            if cell.is_empty() {
                continue;
            }
            match name {
                SEQUENCE_COLUMN => {
                    sequence = cell.parse().map_err(|_| CalcError::SerializationError {
                        reason: format!("bad sequence '{cell}' in {}", path.display()),
                    })?;
                }
                RECORDED_AT_COLUMN => {
                    recorded_at = DateTime::parse_from_rfc3339(cell)
                        .map_err(|e| CalcError::SerializationError {
                            reason: format!("bad timestamp '{cell}': {e}"),
                        })?
                        .with_timezone(&Utc);
                }
                name if spec.is_input(name) => {
                    let value: f64 =
                        cell.parse().map_err(|_| CalcError::SerializationError {
                            reason: format!("bad input '{name}' value '{cell}'"),
                        })?;
                    inputs.push(name, value);
                }
                name => match cell.parse::<f64>() {
                    Ok(value) => outputs.push_number(name, value),
                    Err(_) => outputs.push_text(name, cell),
                },
            }
        }

        entries.push(HistoryEntry {
            sequence,
            recorded_at,
            inputs,
            outputs,
        });
    }

    Ok(entries)
}

fn csv_error(operation: &str, path: &Path, e: impl std::fmt::Display) -> CalcError {
    CalcError::file_error(operation, path.display().to_string(), e.to_string())
}

/// Output column names in order of first appearance across all entries.
/// Entries of one calculator normally agree on their outputs, but the
/// tank calculator's optional gross block makes the union necessary.
fn output_columns(entries: &[HistoryEntry]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for entry in entries {
        for (name, _) in entry.outputs.iter() {
            if !columns.iter().any(|c| c == name) {
                columns.push(name.to_string());
            }
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::evaluate;
    use crate::formula::RawInputs;
    use crate::history::HistoryStore;
    use crate::registry::BUILTIN;

    fn slope_entries() -> Vec<HistoryEntry> {
        let mut store = HistoryStore::new();
        for (rise, run) in [(1.0, 1.0), (3.0, 4.0)] {
            let raw = RawInputs::new().with("rise", rise).with("run", run);
            let (inputs, outputs) = evaluate(&BUILTIN, "slope_to_degree", &raw).unwrap();
            store.append("slope_to_degree", inputs, outputs);
        }
        store.list("slope_to_degree").to_vec()
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slope_history.csv");
        let spec = BUILTIN.lookup("slope_to_degree").unwrap();

        let entries = slope_entries();
        save_history(spec, &path, &entries).unwrap();
        let loaded = load_history(spec, &path).unwrap();

        assert_eq!(loaded.len(), 2);
        for (original, loaded) in entries.iter().zip(&loaded) {
            assert_eq!(original.sequence, loaded.sequence);
            assert_eq!(original.inputs, loaded.inputs);
            for (name, value) in original.outputs.iter() {
                assert_eq!(loaded.outputs.get(name), Some(value));
            }
        }
    }

    #[test]
    fn test_overwrite_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slope_history.csv");
        let spec = BUILTIN.lookup("slope_to_degree").unwrap();

        let entries = slope_entries();
        save_history(spec, &path, &entries).unwrap();
        save_history(spec, &path, &entries[..1]).unwrap();

        assert_eq!(load_history(spec, &path).unwrap().len(), 1);
    }

    #[test]
    fn test_status_text_survives_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ug27.csv");
        let spec = BUILTIN.lookup("shell_thickness").unwrap();

        let raw = RawInputs::new()
            .with("design_pressure", "1.0")
            .with("allowable_stress", "137")
            .with("joint_efficiency", "1.0")
            .with("outside_diameter", "1000")
            .with("nominal_thickness", "10")
            .with("corrosion_allowance", "1")
            .with("mill_tolerance", "0.5");
        let (inputs, outputs) = evaluate(&BUILTIN, "shell_thickness", &raw).unwrap();
        let mut store = HistoryStore::new();
        store.append("shell_thickness", inputs, outputs);

        save_history(spec, &path, store.list("shell_thickness")).unwrap();
        let loaded = load_history(spec, &path).unwrap();
        assert_eq!(
            loaded[0].outputs.get("status").map(|v| v.to_string()),
            Some("OK".to_string())
        );
        // Blank optional inputs stay absent rather than becoming zeros.
        assert!(loaded[0].inputs.find("design_temperature").is_none());
    }

    #[test]
    fn test_load_missing_file_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let spec = BUILTIN.lookup("slope_to_degree").unwrap();
        let err = load_history(spec, &dir.path().join("absent.csv")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
