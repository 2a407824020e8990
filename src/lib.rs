//! Backend engine for the product-safety ban review dashboard.
//!
//! Upstream producers deliver ban records in three overlapping shapes (a
//! snake_case REST API, a legacy PascalCase corpus, and the older
//! violation/recall naming). This crate reconciles them: a generic
//! first-match-wins resolver over a data-driven synonym table, a projector
//! that assembles the canonical view model, aggregate computers for the
//! derived fields, display formatters, and roll-up summaries. The webview
//! shell that renders the result is an external collaborator.

pub mod aggregate;
pub mod corpus;
pub mod error;
pub mod export;
pub mod format;
pub mod models;
pub mod project;
pub mod resolve;
pub mod risk;
pub mod schema;
pub mod store;
pub mod summary;

pub use models::{
    BanImage, CanonicalBan, CorpusMeta, Product, RawRecord, RiskDistribution, RiskLevel,
    StatusSummary, TextEntry,
};
pub use project::{project_ban, Projector};
pub use schema::SynonymTable;
