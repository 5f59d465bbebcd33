use std::path::Path;

use tracing::{info, warn};

use crate::catalog::fallback::builtin_careers;
use crate::catalog::Catalog;
use crate::errors::CatalogError;
use crate::models::career::RawCareer;

/// Loads and enriches the catalog.
///
/// With a path, the file must exist and hold a JSON array of career records;
/// any read, parse, or contract failure is returned. Without a path, the
/// built-in catalog is used.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    let raw = match path {
        Some(path) => read_raw_careers(path)?,
        None => {
            warn!("CAREERS_PATH not set; using built-in career catalog");
            builtin_careers()
        }
    };

    let catalog = Catalog::from_raw(raw)?;
    if catalog.is_empty() {
        warn!("Career catalog is empty; every recommendation list will be empty");
    }
    info!("Career catalog ready ({} careers)", catalog.len());
    Ok(catalog)
}

fn read_raw_careers(path: &Path) -> Result<Vec<RawCareer>, CatalogError> {
    info!("Loading career catalog from {}", path.display());

    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
