//! The builder contract.
//!
//! A builder receives the menu accumulated so far and returns the updated
//! menu. It may append to `children`, rewrite existing items, replace the
//! menu wholesale, or hand it back untouched. Builders for the same menu run
//! in registration order, each seeing the output of the ones before it.

use crate::types::MenuItem;

/// Contributes or transforms the items of a named menu.
///
/// Implementations must not call back into the registry that invokes them.
pub trait MenuBuilder: Send + Sync {
    fn build(&self, menu: MenuItem, menu_name: &str) -> MenuItem;
}

impl<F> MenuBuilder for F
where
    F: Fn(MenuItem, &str) -> MenuItem + Send + Sync,
{
    fn build(&self, menu: MenuItem, menu_name: &str) -> MenuItem {
        self(menu, menu_name)
    }
}

/// Appends a fixed list of items to the menu's top level.
#[derive(Debug, Clone, Default)]
pub struct ItemsBuilder {
    items: Vec<MenuItem>,
}

impl ItemsBuilder {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

impl MenuBuilder for ItemsBuilder {
    fn build(&self, mut menu: MenuItem, _menu_name: &str) -> MenuItem {
        for item in &self.items {
            menu.push_child(item.clone());
        }
        menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_builders() {
        let builder = |menu: MenuItem, name: &str| menu.child(MenuItem::new(name, "Home"));
        let menu = builder.build(MenuItem::root("main"), "main");
        assert_eq!(menu.children()[0].id, "main");
    }

    #[test]
    fn items_builder_appends_after_existing_children() {
        let seed = MenuItem::root("main").child(MenuItem::new("first", "First"));
        let builder = ItemsBuilder::new(vec![
            MenuItem::new("second", "Second"),
            MenuItem::new("third", "Third"),
        ]);

        let menu = builder.build(seed, "main");
        let ids: Vec<_> = menu.children().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn builders_may_replace_the_menu() {
        let builder = |_menu: MenuItem, _name: &str| MenuItem::new("other", "Other");
        let menu = builder.build(MenuItem::root("main"), "main");
        assert_eq!(menu.id, "other");
        assert!(menu.children.is_none());
    }
}
