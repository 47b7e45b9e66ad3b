use std::path::Path;

use addonstore_core::{parse_catalog, CatalogApiVersion, CatalogSnapshot, Channel, StoreAddonModel};
use jiff::Timestamp;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Loads a catalog file into a snapshot.
///
/// The file's modification time stands in for the fetch time, so a
/// catalog left on disk ages like a cached fetch would.
pub fn load_snapshot(path: &Path, api_version: CatalogApiVersion) -> Result<CatalogSnapshot> {
    let content = std::fs::read_to_string(path)?;
    let data = parse_catalog(&content)?;

    let fetched_at = std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .and_then(|modified| Timestamp::try_from(modified).ok())
        .unwrap_or_else(Timestamp::now);

    info!(
        "Loaded catalog for API {} from {}: {} entries",
        api_version,
        path.display(),
        data.len()
    );
    Ok(CatalogSnapshot::with_fetched_at(data, api_version, fetched_at))
}

/// Finds a catalog entry or reports which lookup failed.
pub fn find<'a>(snapshot: &'a CatalogSnapshot, channel: Channel, id: &str) -> Result<&'a StoreAddonModel> {
    snapshot.get(channel, id).ok_or_else(|| Error::NotFound {
        id: id.to_string(),
        channel,
    })
}

/// Lowercase hex SHA-256 of `data`.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Checks a downloaded package against the catalog checksum.
pub fn verify_package(addon: &StoreAddonModel, data: &[u8]) -> Result<()> {
    let actual = sha256_hex(data);
    if !addon.matches_checksum(&actual) {
        return Err(Error::ChecksumMismatch {
            id: addon.details.addon_id.clone(),
            expected: addon.sha256().to_string(),
            actual,
        });
    }
    debug!("Checksum verified: {} ({} bytes)", addon.details.addon_id, data.len());
    Ok(())
}
