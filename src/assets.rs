//! Local asset index: theme-specific vector files keyed by file stem.
//!
//! Each theme root holds one folder per context (`01_MapView_A`,
//! `Navigation`, ...); vector files may sit at any depth below a context
//! folder. Files directly under the theme root belong to no context and are
//! ignored.
//!
//! Indexing never fails: a missing root yields an empty index with a
//! warning, and unreadable or non-UTF-8 files are skipped.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// One of the two rendered themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vector file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalAsset {
    /// File content, trimmed of surrounding whitespace.
    pub content: String,
    /// Name of the context folder directly under the theme root.
    pub context: String,
}

/// Assets of one theme, keyed by file stem. Later files win on stem collisions.
pub type ThemeAssets = BTreeMap<String, LocalAsset>;

/// Both theme indexes.
#[derive(Debug, Clone, Default)]
pub struct AssetIndex {
    pub light: ThemeAssets,
    pub dark: ThemeAssets,
}

impl AssetIndex {
    /// Index both theme roots.
    pub fn build(light_root: &Path, dark_root: &Path, extension: &str) -> Self {
        let light = index_theme(light_root, Theme::Light, extension);
        let dark = index_theme(dark_root, Theme::Dark, extension);
        Self { light, dark }
    }

    pub fn theme(&self, theme: Theme) -> &ThemeAssets {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }

    pub fn get(&self, theme: Theme, stem: &str) -> Option<&LocalAsset> {
        self.theme(theme).get(stem)
    }

    /// Number of indexed assets per context folder.
    pub fn context_counts(&self, theme: Theme) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for asset in self.theme(theme).values() {
            *counts.entry(asset.context.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

/// Index every `*.{extension}` file below the context folders of `root`.
pub fn index_theme(root: &Path, theme: Theme, extension: &str) -> ThemeAssets {
    let mut assets = ThemeAssets::new();

    if !root.is_dir() {
        tracing::warn!(
            theme = %theme,
            path = %root.display(),
            "theme directory not found, skipping thumbnails"
        );
        return assets;
    }

    for context_dir in sorted_subdirs(root) {
        let Some(context) = context_dir.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let mut files = Vec::new();
        collect_files(&context_dir, extension, &mut files);
        files.sort();

        for file in files {
            let Some(stem) = file.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let content = match std::fs::read_to_string(&file) {
                Ok(content) => content,
                Err(e) => {
                    tracing::debug!(path = %file.display(), error = %e, "skipping unreadable asset");
                    continue;
                }
            };
            assets.insert(
                stem.to_string(),
                LocalAsset {
                    content: content.trim().to_string(),
                    context: context.to_string(),
                },
            );
        }
    }

    tracing::info!(theme = %theme, assets = assets.len(), "indexed local assets");
    assets
}

fn sorted_subdirs(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut dirs: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    dirs
}

fn collect_files(dir: &Path, extension: &str, out: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        // Symlinked directories are not followed.
        if entry.file_type().is_ok_and(|ft| ft.is_dir()) {
            collect_files(&path, extension, out);
        } else if path.is_file() && path.extension().is_some_and(|e| e == extension) {
            out.push(path);
        }
    }
}
