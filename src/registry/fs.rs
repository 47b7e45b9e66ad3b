use std::path::Path;

use addonstore_core::ManifestData;
use tracing::{debug, info};

use crate::error::Result;
use crate::registry::MemoryRegistry;

/// Reads a JSON array of already-parsed installed manifests.
pub fn read_manifests(path: &Path) -> Result<Vec<ManifestData>> {
    let content = std::fs::read_to_string(path)?;
    let manifests: Vec<ManifestData> = serde_json::from_str(&content)?;
    debug!("Read {} manifests from {}", manifests.len(), path.display());
    Ok(manifests)
}

/// Loads the installed add-on registry from `path`.
pub fn load(path: &Path) -> Result<MemoryRegistry> {
    let manifests = read_manifests(path)?;
    let registry = MemoryRegistry::from_manifests(&manifests)?;
    info!("Loaded {} installed add-ons from {}", registry.len(), path.display());
    Ok(registry)
}
