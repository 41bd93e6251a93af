//! Human-readable and JSON dumps of built menus.

use std::fmt::Write;

use navmenu_sdk::types::MenuItem;
use serde_json::{Map, Value};
use tracing::warn;

use super::registry::MenuRegistry;

/// Render a menu as an indented outline.
///
/// ```text
/// main
///   Settings (settings) -> /settings [5]
///   Admin (admin) [10] {admin}
///     Users (users) -> /admin/users
/// ```
pub fn render_tree(menu: &MenuItem) -> String {
    let mut out = String::new();
    out.push_str(&menu.title);
    out.push('\n');
    render_children(&mut out, menu.children(), 1);
    out
}

fn render_children(out: &mut String, items: &[MenuItem], depth: usize) {
    for item in items {
        let indent = "  ".repeat(depth);
        // Writing to a String cannot fail.
        let _ = write!(out, "{indent}{} ({})", item.title, item.id);
        if let Some(path) = &item.path {
            let _ = write!(out, " -> {path}");
        }
        if let Some(order) = item.order {
            let _ = write!(out, " [{order}]");
        }
        if let Some(permission) = &item.permission {
            let _ = write!(out, " {{{permission}}}");
        }
        out.push('\n');
        render_children(out, item.children(), depth + 1);
    }
}

impl MenuRegistry {
    /// Every named menu as a JSON object keyed by menu name.
    pub fn export_json(&self) -> Value {
        let mut menus = Map::new();

        for menu_name in self.menu_names() {
            let Some(menu) = self.get_menu(&menu_name) else {
                continue;
            };
            match serde_json::to_value(&*menu) {
                Ok(value) => {
                    menus.insert(menu_name, value);
                }
                Err(e) => {
                    warn!(menu = %menu_name, error = %e, "failed to serialize menu");
                }
            }
        }

        Value::Object(menus)
    }
}
