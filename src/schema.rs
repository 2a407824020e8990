//! The synonym-chain table: which raw keys may carry each canonical field.
//!
//! Three schema generations overlap in the wild: the REST API (snake_case),
//! a legacy static JSON corpus (PascalCase), and the older violation/recall
//! naming. Detection is purely by key presence, so every canonical field
//! carries an ordered candidate list and the first present key wins.

use std::collections::HashMap;

/// Canonical field names, shared between the table and its callers.
pub mod field {
    pub const ID: &str = "id";
    pub const NUMBER: &str = "number";
    pub const DATE: &str = "date";
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const RISK_LEVEL: &str = "risk_level";
    pub const SOURCE_URL: &str = "source_url";
    pub const AGENCY_NAME: &str = "agency_name";
    pub const AGENCY_ACRONYM: &str = "agency_acronym";
    pub const PRODUCTS: &str = "products";
    pub const IMAGES: &str = "images";
    pub const IMAGE_URL: &str = "image_url";
    pub const HAZARDS: &str = "hazards";
    pub const REMEDIES: &str = "remedies";
    pub const INJURIES: &str = "injuries";
    pub const DEATHS: &str = "deaths";
    pub const RECORD_UNITS: &str = "units_affected";

    // Chains for nested sub-records live in the same table under dotted
    // names so collaborators can override them alongside the record-level
    // ones.
    pub const PRODUCT_NAME: &str = "product.name";
    pub const PRODUCT_MODEL_NUMBER: &str = "product.model_number";
    pub const PRODUCT_MANUFACTURER: &str = "product.manufacturer";
    pub const PRODUCT_BRAND: &str = "product.brand";
    pub const PRODUCT_UNITS: &str = "product.units";
    pub const IMAGE_ENTRY_URL: &str = "image.url";
    pub const IMAGE_ENTRY_CAPTION: &str = "image.caption";
    pub const ENTRY_DESCRIPTION: &str = "entry.description";
    pub const ENTRY_HAZARD_TYPE: &str = "entry.hazard_type";
    pub const ENTRY_REMEDY_TYPE: &str = "entry.remedy_type";
}

const BUILTIN_CHAINS: &[(&str, &[&str])] = &[
    (
        field::ID,
        &[
            "product_ban_id",
            "ProductBanID",
            "violation_id",
            "ViolationID",
            "recall_id",
            "RecallID",
        ],
    ),
    (
        field::NUMBER,
        &[
            "ban_number",
            "BanNumber",
            "violation_number",
            "ViolationNumber",
            "recall_number",
            "RecallNumber",
        ],
    ),
    (
        field::DATE,
        &[
            "ban_date",
            "BanDate",
            "violation_date",
            "ViolationDate",
            "recall_date",
            "RecallDate",
        ],
    ),
    (field::TITLE, &["title", "Title"]),
    (field::DESCRIPTION, &["description", "Description"]),
    (field::RISK_LEVEL, &["risk_level", "riskLevel"]),
    (field::SOURCE_URL, &["url", "URL", "source_url"]),
    (field::AGENCY_NAME, &["agency_name", "AgencyName"]),
    (field::AGENCY_ACRONYM, &["agency_acronym", "AgencyAcronym"]),
    (field::PRODUCTS, &["products", "Products"]),
    (field::IMAGES, &["images", "Images"]),
    (field::IMAGE_URL, &["image_url", "ImageURL"]),
    (field::HAZARDS, &["hazards", "Hazards"]),
    (field::REMEDIES, &["remedies", "Remedies"]),
    (field::INJURIES, &["injuries", "Injuries"]),
    (field::DEATHS, &["deaths", "Deaths"]),
    (field::RECORD_UNITS, &["units_affected", "UnitsAffected"]),
    // The legacy corpus wrote product names PascalCase-first, so that
    // generation leads the nested chains where both forms circulate.
    (field::PRODUCT_NAME, &["Name", "name"]),
    (
        field::PRODUCT_MODEL_NUMBER,
        &["model_number", "ModelNumber", "model", "Model"],
    ),
    (field::PRODUCT_MANUFACTURER, &["manufacturer", "Manufacturer"]),
    (field::PRODUCT_BRAND, &["brand", "Brand"]),
    (
        field::PRODUCT_UNITS,
        &["NumberOfUnits", "units_sold", "units_affected"],
    ),
    (field::IMAGE_ENTRY_URL, &["url", "URL", "src"]),
    (field::IMAGE_ENTRY_CAPTION, &["caption", "Caption"]),
    (field::ENTRY_DESCRIPTION, &["description", "Name", "name"]),
    (field::ENTRY_HAZARD_TYPE, &["hazard_type", "HazardType"]),
    (field::ENTRY_REMEDY_TYPE, &["remedy_type", "RemedyType"]),
];

/// Ordered candidate keys per canonical field. The built-in table covers
/// the three known upstream generations; collaborators facing a new schema
/// supply their own chains instead of patching call sites.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    chains: HashMap<String, Vec<String>>,
}

impl Default for SynonymTable {
    fn default() -> Self {
        let chains = BUILTIN_CHAINS
            .iter()
            .map(|(field, keys)| {
                (
                    field.to_string(),
                    keys.iter().map(|key| key.to_string()).collect(),
                )
            })
            .collect();
        Self { chains }
    }
}

impl SynonymTable {
    /// The candidate keys for a canonical field, in priority order. An
    /// unknown field has an empty chain and resolves to nothing.
    pub fn chain(&self, field: &str) -> Vec<&str> {
        self.chains
            .get(field)
            .map(|keys| keys.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Replaces a field's chain wholesale.
    pub fn set_chain(&mut self, field: impl Into<String>, keys: &[&str]) {
        self.chains
            .insert(field.into(), keys.iter().map(|key| key.to_string()).collect());
    }

    /// Puts a priority-override key at the front of a field's chain, so an
    /// explicit upstream field beats the generic synonyms.
    pub fn prepend_key(&mut self, field: &str, key: &str) {
        let chain = self.chains.entry(field.to_string()).or_default();
        chain.retain(|existing| existing != key);
        chain.insert(0, key.to_string());
    }
}
