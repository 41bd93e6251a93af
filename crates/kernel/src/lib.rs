//! navmenu Kernel Library
//!
//! Menu registry, tree utilities and inspection commands. Contributors
//! implement builders against `navmenu-sdk`; this crate merges, sorts and
//! caches what they build. The `navmenu` binary inspects definition files.

pub mod cli;
pub mod config;
pub mod error;
pub mod menu;

pub use config::Config;
pub use error::{MenuError, MenuResult};
pub use menu::{MenuRegistry, MenuView};
