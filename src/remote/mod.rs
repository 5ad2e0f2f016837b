//! Remote design data: components and component sets of a published library.
//!
//! The catalog pipeline depends only on [`DesignSource`]; [`FigmaClient`]
//! talks to the real API and [`StaticSource`] serves prefetched data.

pub mod client;
pub mod model;

pub use client::FigmaClient;
pub use model::{
    ComponentSetIndex, ComponentSetRef, ContainingFrame, RemoteComponent, RemoteComponentSet,
};

use crate::error::RemoteResult;

/// Provider of a library's components and component sets.
pub trait DesignSource {
    fn fetch_components(&self) -> RemoteResult<Vec<RemoteComponent>>;
    fn fetch_component_sets(&self) -> RemoteResult<Vec<RemoteComponentSet>>;
}

/// Components plus the component sets they may belong to.
#[derive(Debug, Clone, Default)]
pub struct RemoteData {
    pub components: Vec<RemoteComponent>,
    pub sets: ComponentSetIndex,
}

/// Fetch everything the catalog builder needs from `source`.
pub fn fetch_remote(source: &dyn DesignSource) -> RemoteResult<RemoteData> {
    let components = source.fetch_components()?;
    let sets = ComponentSetIndex::new(source.fetch_component_sets()?);
    tracing::info!(
        components = components.len(),
        component_sets = sets.len(),
        "fetched remote library"
    );
    if sets.is_empty() && !components.is_empty() {
        tracing::warn!("library has no component sets; every component is standalone");
    }
    Ok(RemoteData { components, sets })
}

/// In-memory source, for snapshots and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pub components: Vec<RemoteComponent>,
    pub component_sets: Vec<RemoteComponentSet>,
}

impl DesignSource for StaticSource {
    fn fetch_components(&self) -> RemoteResult<Vec<RemoteComponent>> {
        Ok(self.components.clone())
    }

    fn fetch_component_sets(&self) -> RemoteResult<Vec<RemoteComponentSet>> {
        Ok(self.component_sets.clone())
    }
}
