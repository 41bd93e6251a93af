//! Menu definition files.
//!
//! Menus can be declared statically instead of through code builders. Each
//! `[[menu]]` section names a menu and lists items appended to its top
//! level:
//!
//! ```toml
//! [[menu]]
//! name = "main"
//!
//! [[menu.items]]
//! id = "users"
//! title = "Users"
//! path = "/users"
//! order = 10
//! ```
//!
//! The same shape is accepted as JSON (`{"menu": [...]}`) and YAML.

use std::path::Path;

use navmenu_sdk::builder::ItemsBuilder;
use navmenu_sdk::types::MenuItem;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::registry::MenuRegistry;
use crate::error::{MenuError, MenuResult};

/// A parsed definition file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuDefinitionFile {
    #[serde(default, rename = "menu")]
    pub menus: Vec<MenuSection>,
}

/// Items contributed to one named menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// Supported definition file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Toml,
    Json,
    Yaml,
}

impl DefinitionFormat {
    /// Pick a format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Parse definition content in the given format.
///
/// `source_name` only labels errors.
pub fn parse_definitions(
    source_name: &str,
    content: &str,
    format: DefinitionFormat,
) -> MenuResult<MenuDefinitionFile> {
    let parsed: Result<MenuDefinitionFile, String> = match format {
        DefinitionFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        DefinitionFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        DefinitionFormat::Yaml => serde_yml::from_str(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|details| MenuError::parse(source_name, format.label(), details))
}

/// Read and parse a definition file, picking the format by extension.
pub fn load_definitions(path: &Path) -> MenuResult<MenuDefinitionFile> {
    let format = DefinitionFormat::from_path(path).ok_or_else(|| MenuError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = std::fs::read_to_string(path).map_err(|e| MenuError::read(path, e))?;

    parse_definitions(&path.display().to_string(), &content, format)
}

impl MenuRegistry {
    /// Create a registry from JSON definition sources.
    ///
    /// Each element of `sources` is a (source_name, json) tuple. Sources that
    /// fail to parse are logged and skipped.
    pub fn from_sources(sources: Vec<(String, String)>) -> Self {
        let registry = Self::new();

        for (source_name, json) in sources {
            match parse_definitions(&source_name, &json, DefinitionFormat::Json) {
                Ok(file) => {
                    registry.register_definitions(file);
                }
                Err(e) => {
                    warn!(source = %source_name, error = %e, "skipping menu definitions");
                }
            }
        }

        registry
    }

    /// Register one [`ItemsBuilder`] per section of a definition file.
    ///
    /// Returns the number of builders registered.
    pub fn register_definitions(&self, file: MenuDefinitionFile) -> usize {
        let count = file.menus.len();
        for section in file.menus {
            self.register(section.name, ItemsBuilder::new(section.items));
        }
        info!(builders = count, "registered menu definitions");
        count
    }

    /// Load a definition file and register its sections.
    pub fn load_file(&self, path: &Path) -> MenuResult<usize> {
        let file = load_definitions(path)?;
        Ok(self.register_definitions(file))
    }
}
