#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Menu registry tests.
//!
//! Exercise the registry through its public API with shared fixtures.

use std::sync::Arc;

use navmenu_kernel::menu::{MenuRegistry, MenuView, SharedBuilder, find_menu_item_by_id};
use navmenu_sdk::builder::ItemsBuilder;
use navmenu_sdk::types::MenuItem;
use navmenu_test_utils::{CountingBuilder, assert, branch, leaf, ordered};

#[test]
fn test_settings_sorts_before_users() {
    let registry = MenuRegistry::new();
    registry.register("main", ItemsBuilder::new(vec![ordered("users", 10)]));
    registry.register("main", ItemsBuilder::new(vec![ordered("settings", 5)]));

    let menu = registry.get_menu("main").unwrap();
    assert::children_are(&menu, &["settings", "users"]);
}

#[test]
fn test_sorted_at_every_depth_across_builders() {
    let registry = MenuRegistry::new();
    registry.register(
        "main",
        ItemsBuilder::new(vec![
            leaf("unordered", "Unordered"),
            branch(
                "admin",
                "Admin",
                vec![
                    leaf("logs", "Logs"),
                    ordered("roles", 2),
                    branch("people", "People", vec![ordered("b", 2), ordered("a", 1)]).order(1),
                ],
            )
            .order(3),
        ]),
    );
    registry.register("main", ItemsBuilder::new(vec![ordered("home", 0)]));

    let menu = registry.get_menu("main").unwrap();
    assert::sorted_at_every_level(&menu);
    assert::children_are(&menu, &["home", "admin", "unordered"]);

    let admin = find_menu_item_by_id(&menu, "admin").unwrap();
    assert::children_are(admin, &["people", "roles", "logs"]);

    let people = find_menu_item_by_id(&menu, "people").unwrap();
    assert::children_are(people, &["a", "b"]);
}

#[test]
fn test_cache_hit_skips_builders() {
    let registry = MenuRegistry::new();
    let builder = CountingBuilder::new(vec![leaf("a", "A")]);
    registry.register("main", builder.clone());

    let first = registry.get_menu("main").unwrap();
    let second = registry.get_menu("main").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(builder.calls(), 1);
}

#[test]
fn test_register_reruns_only_affected_menu() {
    let registry = MenuRegistry::new();
    let main = CountingBuilder::new(vec![leaf("a", "A")]);
    let footer = CountingBuilder::new(vec![leaf("b", "B")]);
    registry.register("main", main.clone());
    registry.register("footer", footer.clone());

    registry.get_menu("main").unwrap();
    registry.get_menu("footer").unwrap();

    registry.register("main", ItemsBuilder::new(vec![leaf("c", "C")]));
    registry.get_menu("main").unwrap();
    registry.get_menu("footer").unwrap();

    assert_eq!(main.calls(), 2);
    assert_eq!(footer.calls(), 1);
}

#[test]
fn test_unregister_builder_handle() {
    let registry = MenuRegistry::new();
    let handle: SharedBuilder = Arc::new(ItemsBuilder::new(vec![leaf("x", "X")]));
    registry.register_shared("main", Arc::clone(&handle));
    registry.register("main", ItemsBuilder::new(vec![leaf("y", "Y")]));

    assert!(registry.unregister_builder("main", &handle));
    let menu = registry.get_menu("main").unwrap();
    assert::children_are(&menu, &["y"]);
}

#[test]
fn test_builder_replacing_menu() {
    let registry = MenuRegistry::new();
    registry.register("main", ItemsBuilder::new(vec![leaf("dropped", "Dropped")]));
    registry.register("main", |_menu: MenuItem, name: &str| {
        MenuItem::new(name, "Replaced").with_children(vec![ordered("b", 2), ordered("a", 1)])
    });

    let menu = registry.get_menu("main").unwrap();
    assert_eq!(menu.title, "Replaced");
    assert::children_are(&menu, &["a", "b"]);
}

#[test]
fn test_search_finds_user_list_only() {
    let registry = MenuRegistry::new();
    registry.register(
        "main",
        ItemsBuilder::new(vec![leaf("users", "User List"), leaf("settings", "Settings")]),
    );

    let matches = registry.search_by_title("user");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].item.title, "User List");
}

#[test]
fn test_view_follows_registry() {
    let registry = MenuRegistry::new();
    let mut view = MenuView::new(registry.clone(), "main");
    assert!(view.menu_items().is_empty());

    registry.register("main", ItemsBuilder::new(vec![ordered("b", 2)]));
    registry.register("main", ItemsBuilder::new(vec![ordered("a", 1)]));

    let ids: Vec<_> = view.menu_items().into_iter().map(|i| i.id).collect();
    assert_eq!(ids, ["a", "b"]);

    registry.clear();
    assert!(view.is_stale());
    assert!(view.menu().is_none());
}
