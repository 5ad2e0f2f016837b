//! The icon catalog: reconciled records, thumbnail tables, and run statistics.

pub mod builder;
pub mod record;
pub mod summary;

pub use builder::{UNCATEGORIZED, build_catalog};
pub use record::{Catalog, IconRecord, ThumbnailTable, VariantKeys, icon_id, search_tags};
pub use summary::CatalogSummary;
