//! The overlay catalog and its loaders.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::builtin::BUILTIN;
use super::error::CatalogError;

/// The two notification theme overlays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationOverlays {
    pub dark: String,
    pub black: String,
}

/// Accent indices of the black/white pair.
///
/// Which member should be enabled depends on whether a dark or black
/// theme is active: white on dark backgrounds, black otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PairedAccents {
    pub black: usize,
    pub white: usize,
}

impl Default for PairedAccents {
    fn default() -> Self {
        Self {
            black: 20,
            white: 21,
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDef {
    stock_dark_theme: String,
    notification: NotificationOverlays,
    dark_themes: Vec<String>,
    black_themes: Vec<String>,
    accents: Vec<String>,
    #[serde(default)]
    paired_accents: PairedAccents,
}

/// Immutable tables of the overlays the coordinator manages.
///
/// A catalog always satisfies these rules, checked on every load:
///
/// - the dark and black theme groups are non-empty; their first entry is
///   the sentinel queried to decide whether the group is active
/// - accent index 0 is the "no accent" slot and is never toggled
/// - the paired accent indices are distinct, non-zero, and in range
/// - no overlay identifier appears twice
///
/// # Example
///
/// ```rust
/// use theme_overlays::OverlayCatalog;
///
/// let catalog = OverlayCatalog::from_yaml_str(r#"
/// stock_dark_theme: org.example.stock.dark
/// notification:
///   dark: org.example.notification.dark
///   black: org.example.notification.black
/// dark_themes: [org.example.theme.dark]
/// black_themes: [org.example.theme.black]
/// accents: [none, org.example.red, org.example.black, org.example.white]
/// paired_accents: { black: 2, white: 3 }
/// "#).unwrap();
///
/// assert_eq!(catalog.dark_sentinel(), "org.example.theme.dark");
/// assert_eq!(catalog.accent(1), Some("org.example.red"));
/// assert_eq!(catalog.accent(0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDef")]
pub struct OverlayCatalog {
    pub(super) stock_dark_theme: String,
    pub(super) notification: NotificationOverlays,
    pub(super) dark_themes: Vec<String>,
    pub(super) black_themes: Vec<String>,
    pub(super) accents: Vec<String>,
    pub(super) paired_accents: PairedAccents,
}

impl OverlayCatalog {
    /// Returns the built-in catalog.
    pub fn builtin() -> &'static OverlayCatalog {
        &BUILTIN
    }

    /// Parses and validates a catalog from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let def: CatalogDef = serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse {
            path: None,
            message: e.to_string(),
        })?;
        Self::try_from(def)
    }

    /// Parses and validates a catalog from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let def: CatalogDef = serde_json::from_str(json).map_err(|e| CatalogError::Parse {
            path: None,
            message: e.to_string(),
        })?;
        Self::try_from(def)
    }

    /// Reads a catalog file, choosing the format from its extension.
    ///
    /// `.yaml` and `.yml` are parsed as YAML, `.json` as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, CatalogError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(CatalogError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&content).map_err(|e| e.with_path(path.to_path_buf()))
    }

    /// The legacy stock dark theme overlay.
    pub fn stock_dark_theme(&self) -> &str {
        &self.stock_dark_theme
    }

    /// The dark and black notification theme overlays.
    pub fn notification(&self) -> &NotificationOverlays {
        &self.notification
    }

    /// The dark theme group, in application order.
    pub fn dark_themes(&self) -> &[String] {
        &self.dark_themes
    }

    /// The black theme group, in application order.
    pub fn black_themes(&self) -> &[String] {
        &self.black_themes
    }

    /// The overlay standing in for the whole dark theme group.
    pub fn dark_sentinel(&self) -> &str {
        &self.dark_themes[0]
    }

    /// The overlay standing in for the whole black theme group.
    pub fn black_sentinel(&self) -> &str {
        &self.black_themes[0]
    }

    /// Number of accent slots, including the "no accent" slot at index 0.
    pub fn accent_count(&self) -> usize {
        self.accents.len()
    }

    /// Returns the overlay for an accent index.
    ///
    /// Index 0 and out-of-range indices have no overlay.
    pub fn accent(&self, index: usize) -> Option<&str> {
        match index {
            0 => None,
            _ => self.accents.get(index).map(String::as_str),
        }
    }

    /// Iterates the accent overlays with their indices, skipping index 0.
    pub fn accent_overlays(&self) -> impl Iterator<Item = (usize, &str)> {
        self.accents
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, overlay)| (index, overlay.as_str()))
    }

    /// The black/white accent pair.
    pub fn paired_accents(&self) -> PairedAccents {
        self.paired_accents
    }

    /// Iterates every overlay identifier the catalog names.
    pub fn overlays(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.stock_dark_theme.as_str())
            .chain([self.notification.dark.as_str(), self.notification.black.as_str()])
            .chain(self.dark_themes.iter().map(String::as_str))
            .chain(self.black_themes.iter().map(String::as_str))
            .chain(self.accent_overlays().map(|(_, overlay)| overlay))
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.dark_themes.is_empty() {
            return Err(CatalogError::Invalid("dark theme group is empty".into()));
        }
        if self.black_themes.is_empty() {
            return Err(CatalogError::Invalid("black theme group is empty".into()));
        }

        let PairedAccents { black, white } = self.paired_accents;
        if black == white {
            return Err(CatalogError::Invalid(format!(
                "paired accents must differ, both are {black}"
            )));
        }
        for (name, index) in [("black", black), ("white", white)] {
            if index == 0 || index >= self.accents.len() {
                return Err(CatalogError::Invalid(format!(
                    "{name} accent index {index} is outside 1..{}",
                    self.accents.len()
                )));
            }
        }

        let mut seen = HashSet::new();
        for overlay in self.overlays() {
            if overlay.trim().is_empty() {
                return Err(CatalogError::Invalid("empty overlay identifier".into()));
            }
            if !seen.insert(overlay) {
                return Err(CatalogError::Invalid(format!(
                    "overlay '{overlay}' is listed more than once"
                )));
            }
        }
        Ok(())
    }
}

impl TryFrom<CatalogDef> for OverlayCatalog {
    type Error = CatalogError;

    fn try_from(def: CatalogDef) -> Result<Self, Self::Error> {
        let catalog = OverlayCatalog {
            stock_dark_theme: def.stock_dark_theme,
            notification: def.notification,
            dark_themes: def.dark_themes,
            black_themes: def.black_themes,
            accents: def.accents,
            paired_accents: def.paired_accents,
        };
        catalog.validate()?;
        Ok(catalog)
    }
}

impl Default for OverlayCatalog {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
