//! Derived view-model fields computed from nested, optionally-absent
//! sub-structures of a ban record.

use serde_json::Value;

use crate::models::{BanImage, CanonicalBan, Product, RawRecord, TextEntry};
use crate::resolve::{resolve_count, resolve_text, value_to_text};
use crate::schema::{field, SynonymTable};

/// Sentinel for card headers that must never render an empty title.
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Sentinel for unit counts no source could supply.
pub const UNKNOWN_UNITS: &str = "Unknown";

/// Materializes the nested products array. Entries that are not objects
/// carry no product fields and are dropped.
pub fn product_list(table: &SynonymTable, raw: Option<&[Value]>) -> Vec<Product> {
    raw.unwrap_or_default()
        .iter()
        .filter_map(Value::as_object)
        .map(|entry| Product {
            name: resolve_text(entry, &table.chain(field::PRODUCT_NAME)),
            model_number: resolve_text(entry, &table.chain(field::PRODUCT_MODEL_NUMBER)),
            manufacturer: resolve_text(entry, &table.chain(field::PRODUCT_MANUFACTURER)),
            brand: resolve_text(entry, &table.chain(field::PRODUCT_BRAND)),
            units_affected: resolve_count(entry, &table.chain(field::PRODUCT_UNITS)),
        })
        .collect()
}

/// The first product's resolved name. Callers pick their own sentinel:
/// [`UNKNOWN_PRODUCT`] for card headers, nothing for exports.
pub fn primary_product_name(products: &[Product]) -> Option<String> {
    products.first().and_then(|product| product.name.clone())
}

/// Unit count for display: the first product's count, else the
/// record-level chain, else absent.
pub fn units_affected(
    table: &SynonymTable,
    products: &[Product],
    record: &RawRecord,
) -> Option<u64> {
    products
        .first()
        .and_then(|product| product.units_affected)
        .or_else(|| resolve_count(record, &table.chain(field::RECORD_UNITS)))
}

pub fn units_display(table: &SynonymTable, products: &[Product], record: &RawRecord) -> String {
    match units_affected(table, products, record) {
        Some(units) => format!("{} units", units),
        None => UNKNOWN_UNITS.to_string(),
    }
}

/// The gallery list: parsed images verbatim when any exist, otherwise a
/// single entry synthesized from the convenience thumbnail URL. A record
/// with one thumbnail renders the same way as one with a full gallery.
pub fn image_list(
    table: &SynonymTable,
    raw: Option<&[Value]>,
    fallback_url: Option<&str>,
) -> Vec<BanImage> {
    let images: Vec<BanImage> = raw
        .unwrap_or_default()
        .iter()
        .filter_map(|entry| parse_image(table, entry))
        .collect();
    if !images.is_empty() {
        return images;
    }
    match fallback_url {
        Some(url) if !url.trim().is_empty() => vec![BanImage {
            url: url.trim().to_string(),
            caption: None,
        }],
        _ => Vec::new(),
    }
}

fn parse_image(table: &SynonymTable, entry: &Value) -> Option<BanImage> {
    // Bare strings are URLs; objects resolve through the image chains.
    if let Some(url) = value_to_text(entry) {
        return Some(BanImage { url, caption: None });
    }
    let entry = entry.as_object()?;
    let url = resolve_text(entry, &table.chain(field::IMAGE_ENTRY_URL))?;
    Some(BanImage {
        url,
        caption: resolve_text(entry, &table.chain(field::IMAGE_ENTRY_CAPTION)),
    })
}

/// Maps raw hazard/remedy entries to text lines, dropping entries that
/// resolve to no text. `category_field` names the chain carrying the type
/// label for this list kind.
pub fn text_list(
    table: &SynonymTable,
    raw: Option<&[Value]>,
    category_field: &str,
) -> Vec<TextEntry> {
    raw.unwrap_or_default()
        .iter()
        .filter_map(|entry| {
            if let Some(description) = value_to_text(entry) {
                return Some(TextEntry {
                    description,
                    category: None,
                });
            }
            let entry = entry.as_object()?;
            let description = resolve_text(entry, &table.chain(field::ENTRY_DESCRIPTION))?;
            Some(TextEntry {
                description,
                category: resolve_text(entry, &table.chain(category_field)),
            })
        })
        .collect()
}

/// "Name (ACRONYM)" label, degrading to whichever half is present.
pub fn agency_label(ban: &CanonicalBan) -> Option<String> {
    match (&ban.agency_name, &ban.agency_acronym) {
        (Some(name), Some(acronym)) => Some(format!("{} ({})", name, acronym)),
        (Some(name), None) => Some(name.clone()),
        (None, Some(acronym)) => Some(acronym.clone()),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawRecord {
        value.as_object().expect("object literal").clone()
    }

    #[test]
    fn image_list_synthesizes_from_fallback_url() {
        let table = SynonymTable::default();
        let images = image_list(&table, Some(&[]), Some("http://x/img.png"));
        assert_eq!(
            images,
            vec![BanImage {
                url: "http://x/img.png".into(),
                caption: None,
            }]
        );
        assert!(image_list(&table, Some(&[]), None).is_empty());
    }

    #[test]
    fn real_gallery_beats_fallback_url() {
        let table = SynonymTable::default();
        let raw = vec![json!({ "url": "http://x/a.png", "caption": "front" })];
        let images = image_list(&table, Some(&raw), Some("http://x/thumb.png"));
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].url, "http://x/a.png");
        assert_eq!(images[0].caption.as_deref(), Some("front"));
    }

    #[test]
    fn bare_string_image_entries_are_urls() {
        let table = SynonymTable::default();
        let raw = vec![json!("http://x/b.png")];
        let images = image_list(&table, Some(&raw), None);
        assert_eq!(images[0].url, "http://x/b.png");
        assert_eq!(images[0].caption, None);
    }

    #[test]
    fn units_display_cascades_to_record_level() {
        let table = SynonymTable::default();
        let rec = record(json!({ "units_affected": 500 }));
        assert_eq!(units_display(&table, &[], &rec), "500 units");
        assert_eq!(units_display(&table, &[], &record(json!({}))), "Unknown");
    }

    #[test]
    fn first_product_units_win_over_record_level() {
        let table = SynonymTable::default();
        let products = product_list(&table, Some(&[json!({ "Name": "X", "units_sold": 10 })]));
        let rec = record(json!({ "units_affected": 500 }));
        assert_eq!(units_affected(&table, &products, &rec), Some(10));
    }

    #[test]
    fn text_list_drops_textless_entries() {
        let table = SynonymTable::default();
        let raw = vec![
            json!({ "description": "Burn hazard", "hazard_type": "Fire" }),
            json!({ "hazard_type": "Orphan category" }),
            json!("Choking hazard"),
        ];
        let entries = text_list(&table, Some(&raw), field::ENTRY_HAZARD_TYPE);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].description, "Burn hazard");
        assert_eq!(entries[0].category.as_deref(), Some("Fire"));
        assert_eq!(entries[1].description, "Choking hazard");
        assert_eq!(entries[1].category, None);
    }

    #[test]
    fn primary_product_prefers_legacy_name_key() {
        let table = SynonymTable::default();
        let products = product_list(&table, Some(&[json!({ "Name": "Widget X", "name": "widget-x" })]));
        assert_eq!(primary_product_name(&products), Some("Widget X".into()));
        assert_eq!(primary_product_name(&[]), None);
    }

    #[test]
    fn agency_label_degrades_gracefully() {
        let mut ban = CanonicalBan::default();
        assert_eq!(agency_label(&ban), None);
        ban.agency_acronym = Some("CPSC".into());
        assert_eq!(agency_label(&ban).as_deref(), Some("CPSC"));
        ban.agency_name = Some("Consumer Product Safety Commission".into());
        assert_eq!(
            agency_label(&ban).as_deref(),
            Some("Consumer Product Safety Commission (CPSC)")
        );
    }
}
