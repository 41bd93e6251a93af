//! Menu registry - collects builders per menu name and caches built trees.
//!
//! Each menu name owns an ordered list of builders. The first read of a menu
//! folds its builders over a fresh root, sorts the result and caches it until
//! a mutation touches that name.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use navmenu_sdk::builder::MenuBuilder;
use navmenu_sdk::types::MenuItem;
use parking_lot::RwLock;
use tracing::{debug, trace};

use super::tree::sort_menu_items;

/// A registered builder handle.
///
/// Registering the same handle twice runs it twice; removal by
/// [`MenuRegistry::unregister_builder`] compares handles by identity.
pub type SharedBuilder = Arc<dyn MenuBuilder>;

/// Registry of menu builders and their built trees.
///
/// Cloning is cheap and every clone sees the same builders, cache and version.
#[derive(Clone, Default)]
pub struct MenuRegistry {
    inner: Arc<MenuRegistryInner>,
}

#[derive(Default)]
struct MenuRegistryInner {
    /// Builders per menu name, in registration order.
    builders: RwLock<BTreeMap<String, Vec<SharedBuilder>>>,
    /// Built and sorted trees per menu name.
    cache: RwLock<HashMap<String, Arc<MenuItem>>>,
    /// Bumped on every mutation; never reset.
    version: AtomicU64,
}

impl MenuRegistry {
    /// Create an empty menu registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a builder for a menu.
    pub fn register<B>(&self, menu_name: impl Into<String>, builder: B)
    where
        B: MenuBuilder + 'static,
    {
        self.register_shared(menu_name, Arc::new(builder));
    }

    /// Register an existing builder handle for a menu.
    pub fn register_shared(&self, menu_name: impl Into<String>, builder: SharedBuilder) {
        let menu_name = menu_name.into();

        let count = {
            let mut builders = self.inner.builders.write();
            let list = builders.entry(menu_name.clone()).or_default();
            list.push(builder);
            list.len()
        };

        let version = self.evict(Some(&menu_name));

        debug!(menu = %menu_name, builders = count, version, "registered menu builder");
    }

    /// Remove every builder for a menu.
    ///
    /// Returns `false` when the menu had no builders.
    pub fn unregister(&self, menu_name: &str) -> bool {
        let removed = self.inner.builders.write().remove(menu_name);
        let Some(removed) = removed else {
            return false;
        };

        let version = self.evict(Some(menu_name));

        debug!(menu = %menu_name, builders = removed.len(), version, "unregistered menu");
        true
    }

    /// Remove every registration of `builder` from a menu.
    ///
    /// Returns `false` when the handle was not registered for that menu.
    pub fn unregister_builder(&self, menu_name: &str, builder: &SharedBuilder) -> bool {
        let removed = {
            let mut builders = self.inner.builders.write();
            let Some(list) = builders.get_mut(menu_name) else {
                return false;
            };

            let before = list.len();
            list.retain(|b| !Arc::ptr_eq(b, builder));
            let removed = before - list.len();

            if list.is_empty() {
                builders.remove(menu_name);
            }
            removed
        };

        if removed == 0 {
            return false;
        }

        let version = self.evict(Some(menu_name));

        debug!(menu = %menu_name, removed, version, "unregistered menu builder");
        true
    }

    /// Get the built menu tree for a name.
    ///
    /// Returns the cached tree when present. Otherwise folds the menu's
    /// builders over a fresh root, sorts, caches and returns the result.
    /// Returns `None` when no builder is registered for the name.
    pub fn get_menu(&self, menu_name: &str) -> Option<Arc<MenuItem>> {
        if let Some(menu) = self.inner.cache.read().get(menu_name) {
            trace!(menu = %menu_name, "menu cache hit");
            return Some(Arc::clone(menu));
        }

        // Snapshot so builders run without any registry lock held.
        let (builders, version) = {
            let builders = self.inner.builders.read();
            let list = builders.get(menu_name).filter(|list| !list.is_empty())?;
            (list.clone(), self.version())
        };

        let mut menu = MenuItem::root(menu_name);
        for builder in &builders {
            menu = builder.build(menu, menu_name);
        }
        sort_menu_items(&mut menu);
        let menu = Arc::new(menu);

        // A mutation during the build leaves the result uncached. Mutations
        // bump the version under the cache lock, so the check and the insert
        // cannot interleave with one.
        {
            let mut cache = self.inner.cache.write();
            if self.version() == version {
                cache.insert(menu_name.to_string(), Arc::clone(&menu));
            }
        }

        debug!(
            menu = %menu_name,
            builders = builders.len(),
            items = menu.children().len(),
            "built menu"
        );

        Some(menu)
    }

    /// Names of menus with at least one registered builder, sorted.
    pub fn menu_names(&self) -> Vec<String> {
        self.inner.builders.read().keys().cloned().collect()
    }

    /// Names of menus currently built and cached, sorted.
    pub fn cached_menu_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.cache.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Check if a menu has any registered builders.
    pub fn contains(&self, menu_name: &str) -> bool {
        self.inner.builders.read().contains_key(menu_name)
    }

    /// Drop the cached tree for one menu, keeping its builders.
    pub fn invalidate(&self, menu_name: &str) {
        let version = self.evict(Some(menu_name));
        debug!(menu = %menu_name, version, "menu cache invalidated");
    }

    /// Drop every cached tree, keeping all builders.
    pub fn invalidate_all(&self) {
        let version = self.evict(None);
        debug!(version, "all menu caches invalidated");
    }

    /// Drop all builders and cached trees.
    ///
    /// The version keeps counting up so views built before the clear go stale.
    pub fn clear(&self) {
        self.inner.builders.write().clear();
        let version = self.evict(None);
        debug!(version, "menu registry cleared");
    }

    /// Current version; increases on every mutation.
    pub fn version(&self) -> u64 {
        self.inner.version.load(Ordering::Acquire)
    }

    /// Number of menus with registered builders.
    pub fn len(&self) -> usize {
        self.inner.builders.read().len()
    }

    /// Check if registry has no builders.
    pub fn is_empty(&self) -> bool {
        self.inner.builders.read().is_empty()
    }

    /// Total number of builder registrations across all menus.
    pub fn builder_count(&self) -> usize {
        self.inner.builders.read().values().map(Vec::len).sum()
    }

    /// Number of builder registrations for one menu.
    pub fn builder_count_for(&self, menu_name: &str) -> usize {
        self.inner
            .builders
            .read()
            .get(menu_name)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Drop one cached tree (or all, for `None`) and bump the version,
    /// both under the cache lock.
    fn evict(&self, menu_name: Option<&str>) -> u64 {
        let mut cache = self.inner.cache.write();
        match menu_name {
            Some(name) => {
                cache.remove(name);
            }
            None => cache.clear(),
        }
        self.inner.version.fetch_add(1, Ordering::AcqRel) + 1
    }
}

impl fmt::Debug for MenuRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuRegistry")
            .field("menus", &self.menu_names())
            .field("builders", &self.builder_count())
            .field("cached", &self.cached_menu_names())
            .field("version", &self.version())
            .finish()
    }
}
