//! Review exports: the projected corpus as a flat CSV with derived
//! columns, or as canonical JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::info;

use crate::aggregate::{agency_label, primary_product_name, units_display, UNKNOWN_PRODUCT};
use crate::format::{format_date, DateStyle};
use crate::models::RawRecord;
use crate::project::Projector;

const EXPORT_HEADER: &[&str] = &[
    "number",
    "title",
    "risk_level",
    "date",
    "agency",
    "primary_product",
    "units",
    "injuries",
    "deaths",
    "source_url",
];

/// One flat review row per record, derived columns included. Product and
/// unit gaps render their sentinels rather than empty cells.
fn ban_row(record: &RawRecord, projector: &Projector) -> Vec<String> {
    let ban = projector.project(record);
    vec![
        ban.number.clone().unwrap_or_default(),
        ban.title.clone().unwrap_or_default(),
        ban.risk_level.as_str().to_string(),
        ban.date
            .as_deref()
            .map(|date| format_date(date, DateStyle::Short))
            .unwrap_or_default(),
        agency_label(&ban).unwrap_or_default(),
        primary_product_name(&ban.products).unwrap_or_else(|| UNKNOWN_PRODUCT.to_string()),
        units_display(projector.table(), &ban.products, record),
        ban.injuries.map(|count| count.to_string()).unwrap_or_default(),
        ban.deaths.map(|count| count.to_string()).unwrap_or_default(),
        ban.source_url.clone().unwrap_or_default(),
    ]
}

pub fn write_ban_csv(records: &[RawRecord], projector: &Projector, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create export dir {:?}", parent))?;
    }
    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("failed to create export CSV {:?}", path))?;
    writer
        .write_record(EXPORT_HEADER)
        .context("failed to write export CSV header")?;
    for record in records {
        writer
            .write_record(ban_row(record, projector))
            .context("failed to write export CSV row")?;
    }
    writer.flush().context("failed to flush export CSV writer")?;
    info!(count = records.len(), path = %path.display(), "exported review CSV");
    Ok(())
}

/// The canonical view models as pretty JSON, for collaborators that want
/// the full nested shape instead of the flat review sheet.
pub fn write_ban_json(records: &[RawRecord], projector: &Projector, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create export dir {:?}", parent))?;
    }
    let bans: Vec<_> = records.iter().map(|record| projector.project(record)).collect();
    let data = serde_json::to_vec_pretty(&bans).context("failed to serialize canonical bans")?;
    fs::write(path, data).with_context(|| format!("failed to write export file {:?}", path))?;
    info!(count = bans.len(), path = %path.display(), "exported canonical JSON");
    Ok(())
}
