//! Menu system for navigation trees.
//!
//! Builders contribute items per menu name and the registry provides:
//! - Cached, recursively sorted trees per menu name
//! - A version counter consumers compare against to detect staleness
//! - Search, validation and statistics over every built menu
//! - Loading builders from TOML/JSON/YAML definition files

pub mod debug;
pub mod definitions;
mod registry;
mod report;
pub mod tree;
pub mod view;

pub use definitions::{DefinitionFormat, MenuDefinitionFile, MenuSection};
pub use registry::{MenuRegistry, SharedBuilder};
pub use report::{MenuStats, SearchMatch, ValidationReport};
pub use tree::{find_menu_item_by_id, sort_menu_items};
pub use view::{MenuView, filter_by_permission, has_children};
