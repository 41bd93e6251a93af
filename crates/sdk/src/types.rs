//! Core types for menu contributors.
//!
//! A menu is a tree of [`MenuItem`]s rooted at a synthetic node named after
//! the menu. Every field except `id` and `title` is optional, so definition
//! files only spell out what they use.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single node in a menu tree.
///
/// `children` being present (even empty) marks the node as a branch;
/// `path` is the navigation target and is expected on leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Identifier, unique within one menu tree.
    pub id: String,

    /// Display label.
    pub title: String,

    /// Navigation target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Opaque icon handle; never interpreted by the kernel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Child items, ordered by `order` once the menu is built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<MenuItem>>,

    /// Sort key (lower = earlier). Items without one sort last.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,

    /// Advisory permission tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,

    /// Free-form metadata for consumers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<BTreeMap<String, serde_json::Value>>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            path: None,
            icon: None,
            children: None,
            order: None,
            permission: None,
            meta: None,
        }
    }

    /// The seed node a menu is built from: `{id: name, title: name, children: []}`.
    pub fn root(menu_name: &str) -> Self {
        Self {
            children: Some(Vec::new()),
            ..Self::new(menu_name, menu_name)
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    /// Set a metadata entry, creating the bag on first use.
    pub fn meta(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.meta
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value);
        self
    }

    /// Append a child, turning the item into a branch.
    pub fn child(mut self, child: MenuItem) -> Self {
        self.push_child(child);
        self
    }

    /// Replace the children list.
    pub fn with_children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = Some(children);
        self
    }

    /// Append a child in place.
    pub fn push_child(&mut self, child: MenuItem) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }

    /// Children as a slice; empty for leaves.
    pub fn children(&self) -> &[MenuItem] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Whether the item has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// Whether the item carries a non-empty navigation target.
    pub fn has_path(&self) -> bool {
        self.path.as_deref().is_some_and(|p| !p.is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn root_is_an_empty_branch() {
        let root = MenuItem::root("main");
        assert_eq!(root.id, "main");
        assert_eq!(root.title, "main");
        assert_eq!(root.children, Some(Vec::new()));
        assert!(!root.has_children());
    }

    #[test]
    fn child_creates_children_list() {
        let item = MenuItem::new("admin", "Admin").child(MenuItem::new("users", "Users"));
        assert!(item.has_children());
        assert_eq!(item.children()[0].id, "users");
    }

    #[test]
    fn empty_path_is_not_a_target() {
        assert!(!MenuItem::new("a", "A").path("").has_path());
        assert!(MenuItem::new("a", "A").path("/a").has_path());
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let json = serde_json::to_value(MenuItem::new("a", "A").order(3)).unwrap();
        assert_eq!(json, serde_json::json!({"id": "a", "title": "A", "order": 3}));
    }

    #[test]
    fn deserializes_with_defaults() {
        let item: MenuItem = serde_json::from_str(
            r#"{"id": "docs", "title": "Docs", "meta": {"badge": "new"}}"#,
        )
        .unwrap();
        assert_eq!(item.path, None);
        assert_eq!(item.children, None);
        assert_eq!(
            item.meta.unwrap().get("badge"),
            Some(&serde_json::json!("new"))
        );
    }
}
