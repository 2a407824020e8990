//! Roll-up counts for summary badges: child collections per ban, risk
//! distribution per corpus.

use crate::models::{CanonicalBan, RawRecord, RiskDistribution, RiskLevel, StatusSummary};
use crate::resolve::resolve_text;

const STATUS_KEYS: &[&str] = &["status", "Status", "state", "State"];

/// Status bucket for children that carry no status key, so totals always
/// reconcile with the per-status counts.
pub const UNKNOWN_STATUS: &str = "unknown";

/// Counts a ban's child records (listings or investigations) in total and
/// per lowercased status. A missing or empty collection is zero counts,
/// not an error; inputs are never mutated.
pub fn summarize_children(children: Option<&[RawRecord]>) -> StatusSummary {
    let mut summary = StatusSummary::default();
    let Some(children) = children else {
        return summary;
    };
    for child in children {
        summary.total += 1;
        let status = resolve_text(child, STATUS_KEYS)
            .map(|status| status.to_lowercase())
            .unwrap_or_else(|| UNKNOWN_STATUS.to_string());
        *summary.by_status.entry(status).or_insert(0) += 1;
    }
    summary
}

pub fn risk_distribution(bans: &[CanonicalBan]) -> RiskDistribution {
    let mut distribution = RiskDistribution::default();
    for ban in bans {
        match ban.risk_level {
            RiskLevel::Low => distribution.low += 1,
            RiskLevel::Medium => distribution.medium += 1,
            RiskLevel::High => distribution.high += 1,
        }
    }
    distribution
}
