//! CLI command implementations for menu inspection.
//!
//! Commands operate on a registry loaded from a definition file and write
//! plain text (or JSON for `export`) to the given writer.

use std::io::Write;

use anyhow::{Context, Result, bail};

use crate::menu::debug::render_tree;
use crate::menu::{MenuRegistry, find_menu_item_by_id};

/// List menu names with their builder counts.
pub fn cmd_names<W: Write>(registry: &MenuRegistry, out: &mut W) -> Result<()> {
    let names = registry.menu_names();
    if names.is_empty() {
        writeln!(out, "No menus registered.")?;
        return Ok(());
    }

    writeln!(out, "{:<24} {:<9}", "MENU", "BUILDERS")?;
    writeln!(out, "{}", "-".repeat(33))?;
    for name in &names {
        writeln!(out, "{name:<24} {}", registry.builder_count_for(name))?;
    }
    Ok(())
}

/// Print one menu, or every menu when `name` is `None`.
pub fn cmd_tree<W: Write>(
    registry: &MenuRegistry,
    name: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let names = match name {
        Some(name) => vec![name.to_string()],
        None => registry.menu_names(),
    };

    for name in names {
        let menu = registry
            .get_menu(&name)
            .with_context(|| format!("menu '{name}' has no registered builders"))?;
        write!(out, "{}", render_tree(&menu))?;
    }
    Ok(())
}

/// Print the first item with `id` in a menu as JSON.
pub fn cmd_find<W: Write>(
    registry: &MenuRegistry,
    name: &str,
    id: &str,
    out: &mut W,
) -> Result<()> {
    let menu = registry
        .get_menu(name)
        .with_context(|| format!("menu '{name}' has no registered builders"))?;
    let item = find_menu_item_by_id(&menu, id)
        .with_context(|| format!("no item with id '{id}' in menu '{name}'"))?;

    serde_json::to_writer_pretty(&mut *out, item).context("failed to serialize item")?;
    writeln!(out)?;
    Ok(())
}

/// Print items whose titles contain `term`.
pub fn cmd_search<W: Write>(registry: &MenuRegistry, term: &str, out: &mut W) -> Result<()> {
    let matches = registry.search_by_title(term);
    if matches.is_empty() {
        writeln!(out, "No items match '{term}'.")?;
        return Ok(());
    }

    for m in &matches {
        let path = m.item.path.as_deref().unwrap_or("-");
        writeln!(out, "{}: {} ({}) {}", m.menu_name, m.item.title, m.item.id, path)?;
    }
    Ok(())
}

/// Print the validation report; fails when errors (or, if `strict`, warnings) exist.
pub fn cmd_validate<W: Write>(registry: &MenuRegistry, strict: bool, out: &mut W) -> Result<()> {
    let report = registry.validate();

    for error in &report.errors {
        writeln!(out, "error: {error}")?;
    }
    for warning in &report.warnings {
        writeln!(out, "warning: {warning}")?;
    }

    if !report.valid {
        bail!("validation failed with {} error(s)", report.errors.len());
    }
    if strict && !report.warnings.is_empty() {
        bail!(
            "validation failed with {} warning(s) in strict mode",
            report.warnings.len()
        );
    }

    writeln!(out, "All {} menu(s) valid.", registry.len())?;
    Ok(())
}

/// Print registry statistics.
pub fn cmd_stats<W: Write>(registry: &MenuRegistry, out: &mut W) -> Result<()> {
    writeln!(out, "{}", registry.stats())?;
    Ok(())
}

/// Print every menu as a JSON object keyed by name.
pub fn cmd_export<W: Write>(registry: &MenuRegistry, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &registry.export_json())
        .context("failed to serialize menus")?;
    writeln!(out)?;
    Ok(())
}
