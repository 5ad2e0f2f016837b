// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # icon-catalog
//!
//! Reconciles a published design library (components and component sets with
//! theme variants) with local light/dark SVG exports into one canonical icon
//! catalog plus two theme-indexed thumbnail tables.
//!
//! ## Architecture
//!
//! - **Naming** (`naming`): tokenizer, kebab keys, name/size splitting, theme suffixes
//! - **Variants** (`variant`): property parsing and light/dark classification
//! - **Assets** (`assets`): theme directory walk, stem → SVG content + context folder
//! - **Remote** (`remote`): design API wire types, blocking client, `DesignSource` seam
//! - **Catalog** (`catalog`): grouping, record construction, thumbnails, summary
//! - **Pipeline** (`pipeline`): sequential index → fetch → build → write
//!
//! ## Library usage
//!
//! ```no_run
//! use icon_catalog::config::CatalogConfig;
//! use icon_catalog::pipeline;
//! use icon_catalog::remote::FigmaClient;
//!
//! let config = CatalogConfig {
//!     file_key: "ywUkdkkWuu1e05R7zcxUlC".into(),
//!     ..Default::default()
//! };
//! let token = config.resolve_token().unwrap();
//! let client = FigmaClient::new(&config.api_base, &config.file_key, token);
//! let output = pipeline::run(&config, &client, |stage| println!("{stage}")).unwrap();
//! println!("{}", output.summary);
//! ```

pub mod assets;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod naming;
pub mod pipeline;
pub mod remote;
pub mod variant;
