//! Loading already-fetched corpora from disk. Network fetch and
//! persistence belong to the shell; this layer only interprets files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::RawRecord;

/// Historical names for the record list inside a wrapped corpus object.
const CORPUS_LIST_KEYS: &[&str] = &[
    "bans",
    "Bans",
    "violations",
    "Violations",
    "recalls",
    "Recalls",
    "results",
    "data",
];

/// Reads a corpus file: a bare JSON array of raw records, an object
/// wrapping the array under one of the historical list keys, or a single
/// record object.
pub fn load_corpus(path: &Path) -> Result<Vec<RawRecord>> {
    let data = fs::read(path).with_context(|| format!("failed to read corpus file {:?}", path))?;
    let value: Value = serde_json::from_slice(&data)
        .with_context(|| format!("failed to parse corpus file {:?}", path))?;
    let records = records_from_value(value);
    debug!(count = records.len(), "loaded corpus records");
    Ok(records)
}

/// Collects raw records out of whichever corpus shape was supplied.
/// Non-object entries carry no fields and are skipped, not fatal.
pub fn records_from_value(value: Value) -> Vec<RawRecord> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            let wrapped = CORPUS_LIST_KEYS
                .iter()
                .find_map(|key| map.remove(*key))
                .and_then(|inner| match inner {
                    Value::Array(items) => Some(items),
                    _ => None,
                });
            match wrapped {
                Some(items) => items,
                None => vec![Value::Object(map)],
            }
        }
        _ => Vec::new(),
    };
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(map) => Some(map),
            other => {
                warn!(%other, "skipping non-object corpus entry");
                None
            }
        })
        .collect()
}

/// Reads a child collection (listings or investigations) from CSV; each
/// row becomes a raw record keyed by the header names. Empty cells are
/// omitted so the presence rules see them as absent.
pub fn read_children_csv(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("failed to open child CSV {:?}", path))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read child CSV headers {:?}", path))?
        .clone();
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.with_context(|| "failed to read child CSV record")?;
        let mut record = RawRecord::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            let cell = cell.trim();
            if cell.is_empty() {
                continue;
            }
            record.insert(header.to_string(), Value::String(cell.to_string()));
        }
        if !record.is_empty() {
            records.push(record);
        }
    }
    debug!(count = records.len(), "loaded child records");
    Ok(records)
}
