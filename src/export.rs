//! Artifact export: the catalog as pretty JSON, thumbnail tables as compact JSON.
//!
//! Output is a pure function of the catalog. Records are already sorted and
//! every map serializes with sorted keys, so identical inputs produce
//! byte-identical files.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::{ICONS_FILE, THUMBNAILS_DARK_FILE, THUMBNAILS_LIGHT_FILE};
use crate::error::{OutputError, OutputResult};

/// Paths of the written artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub icons: PathBuf,
    pub thumbnails_light: PathBuf,
    pub thumbnails_dark: PathBuf,
}

/// Write `icons.json`, `thumbnails.json`, and `thumbnails-dark.json` into
/// `output_dir`, creating it if needed.
pub fn write_artifacts(catalog: &Catalog, output_dir: &Path) -> OutputResult<ArtifactPaths> {
    std::fs::create_dir_all(output_dir).map_err(|e| OutputError::CreateDir {
        path: output_dir.display().to_string(),
        source: e,
    })?;

    let paths = ArtifactPaths {
        icons: output_dir.join(ICONS_FILE),
        thumbnails_light: output_dir.join(THUMBNAILS_LIGHT_FILE),
        thumbnails_dark: output_dir.join(THUMBNAILS_DARK_FILE),
    };

    write_json(&paths.icons, &catalog.icons, true)?;
    write_json(&paths.thumbnails_light, &catalog.thumbnails_light, false)?;
    write_json(&paths.thumbnails_dark, &catalog.thumbnails_dark, false)?;

    tracing::info!(dir = %output_dir.display(), "wrote catalog artifacts");
    Ok(paths)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, pretty: bool) -> OutputResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(|e| OutputError::Serialize {
        artifact: path.display().to_string(),
        message: e.to_string(),
    })?;

    std::fs::write(path, json).map_err(|e| OutputError::Write {
        path: path.display().to_string(),
        source: e,
    })
}
