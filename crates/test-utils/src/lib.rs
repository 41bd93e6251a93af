//! navmenu test utilities.
//!
//! Fixtures for menu items, a builder that counts its invocations, and
//! assertion helpers for menu trees.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use navmenu_sdk::builder::MenuBuilder;
use navmenu_sdk::types::MenuItem;

/// Create a leaf item with a path derived from its id.
pub fn leaf(id: &str, title: &str) -> MenuItem {
    MenuItem::new(id, title).path(format!("/{id}"))
}

/// Create a leaf item with an order.
pub fn ordered(id: &str, order: i32) -> MenuItem {
    leaf(id, id).order(order)
}

/// Create a branch item holding `children`.
pub fn branch(id: &str, title: &str, children: Vec<MenuItem>) -> MenuItem {
    MenuItem::new(id, title).with_children(children)
}

/// A builder that appends fixed items and counts how often it ran.
///
/// Clones share the counter, so a test can keep one clone and register
/// the other.
#[derive(Debug, Clone, Default)]
pub struct CountingBuilder {
    items: Vec<MenuItem>,
    calls: Arc<AtomicUsize>,
}

impl CountingBuilder {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times `build` has run.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MenuBuilder for CountingBuilder {
    fn build(&self, mut menu: MenuItem, _menu_name: &str) -> MenuItem {
        self.calls.fetch_add(1, Ordering::SeqCst);
        for item in &self.items {
            menu.push_child(item.clone());
        }
        menu
    }
}

/// Definition file used by integration tests.
pub const SAMPLE_DEFINITIONS: &str = r#"
[[menu]]
name = "main"

[[menu.items]]
id = "users"
title = "User List"
path = "/users"
order = 10
permission = "view users"

[[menu.items]]
id = "settings"
title = "Settings"
path = "/settings"
order = 5
icon = "gear"

[[menu.items]]
id = "help"
title = "Help"

[[menu]]
name = "footer"

[[menu.items]]
id = "about"
title = "About"
path = "/about"
"#;

/// Assertion helpers for menu trees.
pub mod assert {
    use navmenu_sdk::types::MenuItem;

    /// Ids of the direct children, in order.
    pub fn child_ids(item: &MenuItem) -> Vec<String> {
        item.children().iter().map(|c| c.id.clone()).collect()
    }

    /// Assert the direct children have exactly these ids, in order.
    pub fn children_are(item: &MenuItem, expected: &[&str]) {
        let actual = child_ids(item);
        assert_eq!(
            actual, expected,
            "children of '{}' out of order:\nactual: {actual:?}\nexpected: {expected:?}",
            item.id
        );
    }

    /// Assert every children list in the tree is sorted by order, missing last.
    pub fn sorted_at_every_level(item: &MenuItem) {
        let keys: Vec<_> = item
            .children()
            .iter()
            .map(|c| (c.order.is_none(), c.order))
            .collect();
        assert!(
            keys.windows(2).all(|w| w[0] <= w[1]),
            "children of '{}' not sorted: {keys:?}",
            item.id
        );
        for child in item.children() {
            sorted_at_every_level(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_has_path() {
        let item = leaf("users", "Users");
        assert_eq!(item.path.as_deref(), Some("/users"));
        assert!(item.children.is_none());
    }

    #[test]
    fn counting_builder_shares_counter() {
        let builder = CountingBuilder::new(vec![leaf("a", "A")]);
        let registered = builder.clone();

        let menu = registered.build(MenuItem::root("main"), "main");
        assert_eq!(menu.children().len(), 1);
        assert_eq!(builder.calls(), 1);
    }

    #[test]
    fn sorted_assertion_accepts_missing_last() {
        let menu = branch("root", "Root", vec![ordered("a", 1), ordered("b", 2), leaf("c", "C")]);
        assert::sorted_at_every_level(&menu);
        assert::children_are(&menu, &["a", "b", "c"]);
    }
}
