//! navmenu SDK
//!
//! Types and traits for modules that contribute navigation menus.
//! Contributors depend on this crate only; the kernel owns the registry
//! that merges, sorts and caches what they build.

pub mod builder;
pub mod types;

// Re-export serde_json so contributors can fill `meta` without a direct dependency
#[doc(hidden)]
pub use serde_json;

pub mod prelude {
    pub use crate::builder::{ItemsBuilder, MenuBuilder};
    pub use crate::types::*;
}
