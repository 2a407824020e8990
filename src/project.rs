//! Projection of a raw ban record into the canonical view model.

use crate::aggregate::{image_list, primary_product_name, product_list, text_list};
use crate::models::{CanonicalBan, RawRecord};
use crate::resolve::{resolve_array, resolve_count, resolve_text};
use crate::risk::normalize_risk_value;
use crate::schema::{field, SynonymTable};

/// Projects raw records through a synonym table. The default table covers
/// the three known upstream generations; collaborators facing a new schema
/// supply their own.
#[derive(Debug, Clone, Default)]
pub struct Projector {
    table: SynonymTable,
}

impl Projector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: SynonymTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &SynonymTable {
        &self.table
    }

    /// Pure projection: same record in, same view model out. Absence is
    /// always representable as a default, so this never fails. Dates pass
    /// through raw; the formatters own parse failures at display time.
    pub fn project(&self, record: &RawRecord) -> CanonicalBan {
        let table = &self.table;

        let products = product_list(table, resolve_array(record, &table.chain(field::PRODUCTS)).map(Vec::as_slice));
        let images = image_list(
            table,
            resolve_array(record, &table.chain(field::IMAGES)).map(Vec::as_slice),
            resolve_text(record, &table.chain(field::IMAGE_URL)).as_deref(),
        );
        let hazards = text_list(
            table,
            resolve_array(record, &table.chain(field::HAZARDS)).map(Vec::as_slice),
            field::ENTRY_HAZARD_TYPE,
        );
        let remedies = text_list(
            table,
            resolve_array(record, &table.chain(field::REMEDIES)).map(Vec::as_slice),
            field::ENTRY_REMEDY_TYPE,
        );

        let title = resolve_text(record, &table.chain(field::TITLE))
            .or_else(|| primary_product_name(&products));
        let risk_level = resolve_text(record, &table.chain(field::RISK_LEVEL))
            .map(|raw| normalize_risk_value(&raw))
            .unwrap_or_default();

        CanonicalBan {
            id: resolve_text(record, &table.chain(field::ID)),
            title,
            number: resolve_text(record, &table.chain(field::NUMBER)),
            date: resolve_text(record, &table.chain(field::DATE)),
            description: resolve_text(record, &table.chain(field::DESCRIPTION)),
            risk_level,
            source_url: resolve_text(record, &table.chain(field::SOURCE_URL)),
            agency_name: resolve_text(record, &table.chain(field::AGENCY_NAME)),
            agency_acronym: resolve_text(record, &table.chain(field::AGENCY_ACRONYM)),
            products,
            images,
            hazards,
            remedies,
            injuries: resolve_count(record, &table.chain(field::INJURIES)),
            deaths: resolve_count(record, &table.chain(field::DEATHS)),
        }
    }
}

/// One-off projection with the built-in synonym table.
pub fn project_ban(record: &RawRecord) -> CanonicalBan {
    Projector::new().project(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskLevel;
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawRecord {
        value.as_object().expect("object literal").clone()
    }

    #[test]
    fn empty_record_projects_to_documented_defaults() {
        let ban = project_ban(&record(json!({})));
        assert_eq!(ban.risk_level, RiskLevel::Low);
        assert!(ban.products.is_empty());
        assert!(ban.images.is_empty());
        assert!(ban.hazards.is_empty());
        assert!(ban.remedies.is_empty());
        assert_eq!(ban.id, None);
        assert_eq!(ban.injuries, None);
        assert_eq!(ban.deaths, None);
    }

    #[test]
    fn snake_case_wins_when_earlier_in_chain() {
        let ban = project_ban(&record(json!({
            "ban_number": "B-100",
            "BanNumber": "B-200",
            "ViolationNumber": "V-300",
        })));
        assert_eq!(ban.number.as_deref(), Some("B-100"));

        // and the legacy key carries the field when it is the only one
        let ban = project_ban(&record(json!({ "RecallNumber": "R-9" })));
        assert_eq!(ban.number.as_deref(), Some("R-9"));
    }

    #[test]
    fn projection_is_idempotent() {
        let rec = record(json!({
            "ViolationID": "V1",
            "Title": "Widget",
            "Products": [{ "Name": "Widget X", "units_sold": 10 }],
        }));
        let projector = Projector::new();
        assert_eq!(projector.project(&rec), projector.project(&rec));
    }

    #[test]
    fn mixed_generation_record_projects_end_to_end() {
        let ban = project_ban(&record(json!({
            "ViolationID": "V1",
            "Title": "Widget",
            "riskLevel": "HIGH",
            "Products": [{ "Name": "Widget X", "units_sold": 10 }],
            "Injuries": 0,
        })));
        assert_eq!(ban.id.as_deref(), Some("V1"));
        assert_eq!(ban.title.as_deref(), Some("Widget"));
        assert_eq!(ban.risk_level, RiskLevel::High);
        assert_eq!(ban.products.len(), 1);
        assert_eq!(ban.products[0].name.as_deref(), Some("Widget X"));
        assert_eq!(ban.products[0].units_affected, Some(10));
        // zero survives as a real value
        assert_eq!(ban.injuries, Some(0));
    }

    #[test]
    fn title_falls_back_to_primary_product_name() {
        let ban = project_ban(&record(json!({
            "Products": [{ "name": "Fallback Lamp" }],
        })));
        assert_eq!(ban.title.as_deref(), Some("Fallback Lamp"));
    }

    #[test]
    fn empty_images_synthesize_from_image_url() {
        let ban = project_ban(&record(json!({
            "images": [],
            "ImageURL": "http://x/thumb.png",
        })));
        assert_eq!(ban.images.len(), 1);
        assert_eq!(ban.images[0].url, "http://x/thumb.png");
    }

    #[test]
    fn unrecognized_risk_defaults_to_low() {
        let ban = project_ban(&record(json!({ "risk_level": "catastrophic" })));
        assert_eq!(ban.risk_level, RiskLevel::Low);
    }

    #[test]
    fn custom_table_redirects_a_chain() {
        let mut table = SynonymTable::default();
        table.set_chain(field::ID, &["ban_ref"]);
        let projector = Projector::with_table(table);
        let ban = projector.project(&record(json!({
            "ban_ref": "X-1",
            "violation_id": "ignored",
        })));
        assert_eq!(ban.id.as_deref(), Some("X-1"));
    }
}
