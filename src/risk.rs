use crate::models::RiskLevel;

/// Normalizes a raw risk label to the canonical enum. Unrecognized and
/// empty labels read as low, never as an error. The moderate/severe forms
/// come from the violation-era corpus.
pub fn normalize_risk_value(raw: &str) -> RiskLevel {
    match raw.trim().to_lowercase().as_str() {
        "high" | "severe" => RiskLevel::High,
        "medium" | "moderate" => RiskLevel::Medium,
        _ => RiskLevel::Low,
    }
}

pub fn severity_rank(level: RiskLevel) -> u8 {
    match level {
        RiskLevel::High => 3,
        RiskLevel::Medium => 2,
        RiskLevel::Low => 1,
    }
}
