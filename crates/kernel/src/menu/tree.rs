//! Recursive helpers over menu trees.

use navmenu_sdk::types::MenuItem;

/// Sort every children list in the tree by `order`, ascending.
///
/// Items without an `order` come after all items that have one. The sort is
/// stable, so items with equal keys keep their builder order.
pub fn sort_menu_items(item: &mut MenuItem) {
    let Some(children) = item.children.as_mut() else {
        return;
    };

    children.sort_by_key(|child| (child.order.is_none(), child.order));

    for child in children.iter_mut() {
        sort_menu_items(child);
    }
}

/// Find the first item with `id` in a depth-first pre-order walk.
///
/// The root itself is checked first.
pub fn find_menu_item_by_id<'a>(tree: &'a MenuItem, id: &str) -> Option<&'a MenuItem> {
    if tree.id == id {
        return Some(tree);
    }
    tree.children()
        .iter()
        .find_map(|child| find_menu_item_by_id(child, id))
}

/// Visit every descendant of `root` in pre-order with its depth.
///
/// The root's direct children are at depth 1.
pub fn walk<'a, F>(root: &'a MenuItem, visit: &mut F)
where
    F: FnMut(&'a MenuItem, usize),
{
    fn descend<'a, F>(items: &'a [MenuItem], depth: usize, visit: &mut F)
    where
        F: FnMut(&'a MenuItem, usize),
    {
        for item in items {
            visit(item, depth);
            descend(item.children(), depth + 1, visit);
        }
    }

    descend(root.children(), 1, visit);
}

/// Descendants of `root` whose title contains `term`, ignoring case.
pub fn search_titles<'a>(root: &'a MenuItem, term: &str) -> Vec<&'a MenuItem> {
    let needle = term.to_lowercase();
    let mut found = Vec::new();
    walk(root, &mut |item, _depth| {
        if item.title.to_lowercase().contains(&needle) {
            found.push(item);
        }
    });
    found
}
