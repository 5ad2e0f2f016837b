//! Run statistics: thumbnail coverage and unmatched icons.

use std::fmt;

use crate::catalog::record::Catalog;
use crate::variant::ThemeRole;

/// How many unmatched component names are listed.
pub const UNMATCHED_SAMPLE: usize = 10;

/// Counts describing how well remote icons matched local assets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub icons: usize,
    pub thumbnails_light: usize,
    pub thumbnails_dark: usize,
    /// Icons with a dark ("B") variant key.
    pub with_dark_variant: usize,
    pub light_matches: usize,
    pub dark_matches: usize,
    /// First component names without a light thumbnail, in catalog order.
    pub unmatched_sample: Vec<String>,
    pub unmatched_total: usize,
}

impl CatalogSummary {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let icons = &catalog.icons;
        let unmatched: Vec<&str> = icons
            .iter()
            .filter(|i| !catalog.thumbnails_light.contains_key(&i.id))
            .map(|i| i.component_name.as_str())
            .collect();

        Self {
            icons: icons.len(),
            thumbnails_light: catalog.thumbnails_light.len(),
            thumbnails_dark: catalog.thumbnails_dark.len(),
            with_dark_variant: icons
                .iter()
                .filter(|i| i.variant_keys.role_key(ThemeRole::Dark).is_some())
                .count(),
            light_matches: icons.len() - unmatched.len(),
            dark_matches: icons
                .iter()
                .filter(|i| catalog.thumbnails_dark.contains_key(&i.id))
                .count(),
            unmatched_sample: unmatched
                .iter()
                .take(UNMATCHED_SAMPLE)
                .map(|s| s.to_string())
                .collect(),
            unmatched_total: unmatched.len(),
        }
    }
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  icons.json:            {} icons", self.icons)?;
        writeln!(f, "  thumbnails.json:       {} light SVGs", self.thumbnails_light)?;
        writeln!(f, "  thumbnails-dark.json:  {} dark SVGs", self.thumbnails_dark)?;
        writeln!(f)?;
        writeln!(
            f,
            "  Variant B (dark) keys: {}/{}",
            self.with_dark_variant, self.icons
        )?;
        writeln!(f, "  Light thumb match:     {}/{}", self.light_matches, self.icons)?;
        write!(f, "  Dark thumb match:      {}/{}", self.dark_matches, self.icons)?;

        if self.unmatched_total > 0 {
            writeln!(f)?;
            writeln!(f)?;
            write!(f, "  Unmatched (no light SVG):")?;
            for name in &self.unmatched_sample {
                write!(f, "\n    - {name}")?;
            }
            let rest = self.unmatched_total - self.unmatched_sample.len();
            if rest > 0 {
                write!(f, "\n    ... and {rest} more")?;
            }
        }
        Ok(())
    }
}
