//! Version-stamped access to one menu.
//!
//! A [`MenuView`] remembers the registry version it last read at and
//! re-reads the menu whenever the registry has moved on. Consumers that
//! render menus hold a view instead of re-querying the registry each frame.

use std::sync::Arc;

use navmenu_sdk::types::MenuItem;
use tracing::trace;

use super::registry::MenuRegistry;

/// A cached handle on a single menu that refreshes when the registry changes.
#[derive(Debug, Clone)]
pub struct MenuView {
    registry: MenuRegistry,
    menu_name: String,
    /// Version the current `menu` was read at; `None` before the first read.
    seen_version: Option<u64>,
    menu: Option<Arc<MenuItem>>,
}

impl MenuView {
    pub fn new(registry: MenuRegistry, menu_name: impl Into<String>) -> Self {
        Self {
            registry,
            menu_name: menu_name.into(),
            seen_version: None,
            menu: None,
        }
    }

    pub fn menu_name(&self) -> &str {
        &self.menu_name
    }

    /// Whether the registry has changed since the last read.
    pub fn is_stale(&self) -> bool {
        self.seen_version != Some(self.registry.version())
    }

    /// The current tree, re-read from the registry if stale.
    pub fn menu(&mut self) -> Option<Arc<MenuItem>> {
        self.refresh();
        self.menu.clone()
    }

    /// Top-level items of the current tree; empty when the menu is absent.
    pub fn menu_items(&mut self) -> Vec<MenuItem> {
        self.refresh();
        self.menu
            .as_deref()
            .map(|menu| menu.children().to_vec())
            .unwrap_or_default()
    }

    fn refresh(&mut self) {
        // Read the version first so a change during the read is seen next time.
        let version = self.registry.version();
        if self.seen_version == Some(version) {
            return;
        }

        trace!(menu = %self.menu_name, version, "refreshing menu view");
        self.menu = self.registry.get_menu(&self.menu_name);
        self.seen_version = Some(version);
    }
}

/// Whether an item has at least one child.
pub fn has_children(item: &MenuItem) -> bool {
    item.has_children()
}

/// Keep items the given permissions allow.
///
/// With no permission list every item is kept. Otherwise an item is kept
/// when it has no permission tag or its tag is in the list. Only the given
/// level is filtered; children are kept as they are.
pub fn filter_by_permission<S>(items: &[MenuItem], permissions: Option<&[S]>) -> Vec<MenuItem>
where
    S: AsRef<str>,
{
    let Some(permissions) = permissions else {
        return items.to_vec();
    };

    items
        .iter()
        .filter(|item| match item.permission.as_deref() {
            None => true,
            Some(tag) => permissions.iter().any(|p| p.as_ref() == tag),
        })
        .cloned()
        .collect()
}
