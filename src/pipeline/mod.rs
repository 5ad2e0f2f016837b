//! Catalog pipeline: index local assets, fetch remote data, build, write.
//!
//! Stages run strictly in sequence. Each one completes before the next
//! starts, and the only fallible stages are the remote fetch and the final
//! write.

use std::fmt;

use crate::assets::AssetIndex;
use crate::catalog::{Catalog, CatalogSummary, build_catalog};
use crate::config::CatalogConfig;
use crate::error::CatalogResult;
use crate::export::{ArtifactPaths, write_artifacts};
use crate::remote::{DesignSource, fetch_remote};

/// Pipeline stages that produce the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Walk both theme roots.
    IndexAssets,
    /// Fetch components and component sets.
    FetchRemote,
    /// Reconcile and write artifacts.
    BuildCatalog,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::IndexAssets, Stage::FetchRemote, Stage::BuildCatalog];

    /// 1-based position among [`Stage::ALL`].
    pub fn ordinal(self) -> usize {
        match self {
            Self::IndexAssets => 1,
            Self::FetchRemote => 2,
            Self::BuildCatalog => 3,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::IndexAssets => "Indexing local SVGs...",
            Self::FetchRemote => "Fetching from design API...",
            Self::BuildCatalog => "Building icon records...",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}/{}] {}",
            self.ordinal(),
            Self::ALL.len(),
            self.description()
        )
    }
}

/// Result of a full run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub catalog: Catalog,
    pub summary: CatalogSummary,
    pub artifacts: ArtifactPaths,
}

/// Build the catalog without writing anything. `on_stage` is called as each
/// stage starts.
pub fn build(
    config: &CatalogConfig,
    source: &dyn DesignSource,
    mut on_stage: impl FnMut(Stage),
) -> CatalogResult<Catalog> {
    config.validate()?;

    on_stage(Stage::IndexAssets);
    let assets = AssetIndex::build(
        &config.light_root(),
        &config.dark_root(),
        &config.asset_extension,
    );

    on_stage(Stage::FetchRemote);
    let remote = fetch_remote(source)?;

    on_stage(Stage::BuildCatalog);
    Ok(build_catalog(&remote, &assets))
}

/// Build the catalog and write its artifacts to `config.output_dir`.
pub fn run(
    config: &CatalogConfig,
    source: &dyn DesignSource,
    on_stage: impl FnMut(Stage),
) -> CatalogResult<RunOutput> {
    let catalog = build(config, source, on_stage)?;
    let artifacts = write_artifacts(&catalog, &config.output_dir)?;
    let summary = CatalogSummary::from_catalog(&catalog);
    Ok(RunOutput {
        catalog,
        summary,
        artifacts,
    })
}
