mod schema;
mod validation;

pub use schema::{Catalog, Criterion, SportProfile};
pub use validation::validate_catalog;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/sport-scout/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("sport-scout")
}

/// Get the default catalogue file path (~/.config/sport-scout/catalog.yaml)
pub fn get_catalog_path() -> PathBuf {
    get_config_dir().join("catalog.yaml")
}

/// Load the sport catalogue.
///
/// An explicit path must exist. Without one, the default path is used when
/// present, otherwise the built-in catalogue of ten sports applies.
///
/// # Errors
///
/// Returns an error if an explicit catalogue file is missing, unreadable, or
/// not valid YAML.
pub fn load_catalog(path: Option<PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Catalogue file not found at {}", path.display());
            }
            read_catalog(&path)
        }
        None => {
            let default_path = get_catalog_path();
            if default_path.exists() {
                read_catalog(&default_path)
            } else {
                Ok(Catalog::default())
            }
        }
    }
}

fn read_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalogue file at {}", path.display()))?;

    let catalog: Catalog = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse catalogue: invalid YAML in {}", path.display()))?;

    Ok(catalog)
}
