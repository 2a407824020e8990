use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A ban record exactly as an upstream producer delivered it. No producer
/// is authoritative; the same concept may hide under several key names.
pub type RawRecord = serde_json::Map<String, Value>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: Option<String>,
    pub model_number: Option<String>,
    pub manufacturer: Option<String>,
    pub brand: Option<String>,
    pub units_affected: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BanImage {
    pub url: String,
    pub caption: Option<String>,
}

/// A hazard or remedy line. `category` carries the upstream type label
/// (`hazard_type` / `remedy_type`) when one was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextEntry {
    pub description: String,
    pub category: Option<String>,
}

/// The normalized view model the rendering layer consumes. Every field has
/// a defined default; the sequences are empty rather than absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalBan {
    pub id: Option<String>,
    pub title: Option<String>,
    pub number: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub risk_level: RiskLevel,
    pub source_url: Option<String>,
    pub agency_name: Option<String>,
    pub agency_acronym: Option<String>,
    pub products: Vec<Product>,
    pub images: Vec<BanImage>,
    pub hazards: Vec<TextEntry>,
    pub remedies: Vec<TextEntry>,
    pub injuries: Option<u64>,
    pub deaths: Option<u64>,
}

/// Roll-up of a child collection (listings or investigations) for the
/// summary badges on a parent ban.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatusSummary {
    pub total: usize,
    pub by_status: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RiskDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusMeta {
    pub id: Uuid,
    pub name: String,
    pub loaded_at: DateTime<Utc>,
    pub total_records: usize,
    #[serde(default)]
    pub high_risk_records: usize,
}
