use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    pub blurb: Option<String>,
}

impl CategoryConfig {
    /// Generate a URL-safe slug from the category name.
    ///
    /// The slug is the value used in feed filters and query strings.
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' {
                    c
                } else if c == ' ' {
                    '-'
                } else {
                    '\0'
                }
            })
            .filter(|&c| c != '\0')
            .collect::<String>()
            .split('-')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoriesFile {
    pub categories: Vec<CategoryConfig>,
}

/// Load and validate the service-category registry from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_categories(path: &Path) -> Result<CategoriesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CategoriesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let categories_file: CategoriesFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CategoriesFileParse)?;

    validate_categories(&categories_file)?;

    Ok(categories_file)
}

fn validate_categories(categories_file: &CategoriesFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();
    let mut seen_slugs = HashSet::new();

    for category in &categories_file.categories {
        if category.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "category name must be non-empty".to_string(),
            ));
        }

        let lower_name = category.name.to_lowercase();
        if !seen_names.insert(lower_name) {
            return Err(ConfigError::Validation(format!(
                "duplicate category name: '{}'",
                category.name
            )));
        }

        let slug = category.slug();
        if slug.is_empty() {
            return Err(ConfigError::Validation(format!(
                "category '{}' produces an empty slug",
                category.name
            )));
        }
        if !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category slug: '{}' (from category '{}')",
                slug, category.name
            )));
        }
    }

    Ok(())
}
