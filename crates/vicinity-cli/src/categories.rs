//! Service-category registry inspection.

use vicinity_core::{load_categories, AppConfig};

use crate::render::EMPTY_CELL;

/// Load, validate, and print the category registry.
///
/// # Errors
///
/// Returns an error when the registry file is missing, unparseable, or fails
/// validation (duplicate names, duplicate slugs, empty names).
pub(crate) fn run(config: &AppConfig) -> anyhow::Result<()> {
    let categories_file = load_categories(&config.categories_path)?;
    println!(
        "{} categories from {}",
        categories_file.categories.len(),
        config.categories_path.display()
    );
    println!();
    println!("{:<20}{:<24}BLURB", "SLUG", "NAME");
    for category in &categories_file.categories {
        println!(
            "{:<20}{:<24}{}",
            category.slug(),
            category.name,
            category.blurb.as_deref().unwrap_or(EMPTY_CELL)
        );
    }
    Ok(())
}
