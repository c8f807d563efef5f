use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::models::Recipe;

const UNKNOWN: &str = "Onbekend";

/// Next free sequence number in the recipes folder.
///
/// Looks at `<n> - <label>.txt` files and returns the highest `n` plus one,
/// or 1 when there are none.
pub fn next_file_number(dir: &Path) -> Result<u32> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read recipes folder: {}", dir.display()))?;

    let mut highest: u32 = 0;
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Some(n) = file_number(name) {
            highest = highest.max(n);
        }
    }
    highest
        .checked_add(1)
        .context("Recipe file numbers exhausted")
}

fn file_number(file_name: &str) -> Option<u32> {
    if !file_name.ends_with(".txt") {
        return None;
    }
    let prefix = file_name.split(" - ").next()?;
    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

fn join_or_unknown(values: &[String]) -> String {
    if values.is_empty() {
        UNKNOWN.to_string()
    } else {
        values.join(", ")
    }
}

/// Plain-text rendering written to the recipe export file.
#[must_use]
pub fn render_recipe(recipe: &Recipe) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Recept: {}", recipe.label);
    let _ = writeln!(out, "Bron: {}", recipe.source);
    let _ = writeln!(out, "Link naar recept: {}", recipe.url);
    out.push('\n');
    let _ = writeln!(out, "Maaltijdtype: {}", join_or_unknown(&recipe.meal_type));
    let _ = writeln!(out, "Gerechtstype: {}", join_or_unknown(&recipe.dish_type));
    let _ = writeln!(out, "Keukentype: {}", join_or_unknown(&recipe.cuisine_type));
    out.push('\n');
    out.push_str("Ingrediënten:\n");
    for line in &recipe.ingredient_lines {
        let _ = writeln!(out, "  - {line}");
    }
    out.push('\n');
    let _ = writeln!(out, "Calorieën: {:.2}", recipe.calories);
    out
}

/// File name for an exported recipe. Path separators in the label are
/// replaced so the file always lands in the recipes folder.
#[must_use]
pub fn export_file_name(number: u32, label: &str) -> String {
    let label: String = label
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    format!("{number} - {}.txt", label.trim())
}

/// Write the recipe to the next numbered file in `dir`.
pub fn save_recipe(dir: &Path, recipe: &Recipe) -> Result<PathBuf> {
    let number = next_file_number(dir)?;
    let path = dir.join(export_file_name(number, &recipe.label));
    std::fs::write(&path, render_recipe(recipe))
        .with_context(|| format!("Failed to write recipe file: {}", path.display()))?;
    debug!("saved recipe to {}", path.display());
    Ok(path)
}
