//! Read-only reports across every menu in a registry.

use std::collections::HashSet;
use std::fmt;

use navmenu_sdk::types::MenuItem;
use serde::Serialize;
use tracing::debug;

use super::registry::MenuRegistry;
use super::tree::{search_titles, walk};

/// An item whose title matched a search, with the menu it lives in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchMatch {
    pub menu_name: String,
    pub item: MenuItem,
}

/// Outcome of [`MenuRegistry::validate`].
///
/// Errors make the report invalid; warnings do not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Counts gathered in one pass over every menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MenuStats {
    /// Menus with at least one builder.
    pub menus: usize,
    /// Items below the menu roots.
    pub items: usize,
    /// Deepest item level; top-level items are depth 1.
    pub max_depth: usize,
    pub items_with_icon: usize,
    pub items_with_permission: usize,
}

impl fmt::Display for MenuStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "menus:            {}", self.menus)?;
        writeln!(f, "items:            {}", self.items)?;
        writeln!(f, "max depth:        {}", self.max_depth)?;
        writeln!(f, "with icon:        {}", self.items_with_icon)?;
        write!(f, "with permission:  {}", self.items_with_permission)
    }
}

impl MenuRegistry {
    /// Find items whose title contains `term` (case-insensitive) in every menu.
    ///
    /// Matches are grouped by menu name in sorted order and keep tree
    /// pre-order within a menu. Menus are built on demand.
    pub fn search_by_title(&self, term: &str) -> Vec<SearchMatch> {
        let mut matches = Vec::new();

        for menu_name in self.menu_names() {
            let Some(menu) = self.get_menu(&menu_name) else {
                continue;
            };
            for item in search_titles(&menu, term) {
                matches.push(SearchMatch {
                    menu_name: menu_name.clone(),
                    item: item.clone(),
                });
            }
        }

        debug!(term = %term, matches = matches.len(), "menu title search");
        matches
    }

    /// Check every menu for duplicate ids and ambiguous or dead items.
    ///
    /// - error: an id already seen earlier in the same menu, the root included
    /// - warning: an item with both children and a path
    /// - warning: an item with neither children nor a path
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        for menu_name in self.menu_names() {
            let Some(menu) = self.get_menu(&menu_name) else {
                continue;
            };

            // The root's id counts, so an item reusing the menu name is a duplicate.
            let mut seen = HashSet::from([menu.id.as_str()]);
            walk(&menu, &mut |item, _depth| {
                if !seen.insert(item.id.as_str()) {
                    report
                        .errors
                        .push(format!("menu '{menu_name}': duplicate id '{}'", item.id));
                }

                let is_branch = item.children.is_some();
                match (is_branch, item.has_path()) {
                    (true, true) => report.warnings.push(format!(
                        "menu '{menu_name}': item '{}' has both children and a path",
                        item.id
                    )),
                    (false, false) => report.warnings.push(format!(
                        "menu '{menu_name}': item '{}' has neither children nor a path",
                        item.id
                    )),
                    _ => {}
                }
            });
        }

        report.valid = report.errors.is_empty();
        debug!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "validated menus"
        );
        report
    }

    /// Gather item counts and depth across every menu.
    pub fn stats(&self) -> MenuStats {
        let mut stats = MenuStats::default();

        for menu_name in self.menu_names() {
            let Some(menu) = self.get_menu(&menu_name) else {
                continue;
            };
            stats.menus += 1;

            walk(&menu, &mut |item, depth| {
                stats.items += 1;
                stats.max_depth = stats.max_depth.max(depth);
                if item.icon.is_some() {
                    stats.items_with_icon += 1;
                }
                if item.permission.is_some() {
                    stats.items_with_permission += 1;
                }
            });
        }

        stats
    }
}
