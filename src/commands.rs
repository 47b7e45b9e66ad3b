//! Command handlers behind the `addonstore` binary.
//!
//! Each handler returns JSON for the caller to print.

use std::path::Path;

use addonstore_core::{AddonMetadata, CatalogSnapshot, Channel, InstalledAddons};
use serde_json::{json, Value};

use crate::catalog;
use crate::error::Result;

/// Handle `list`
pub fn list(snapshot: &CatalogSnapshot, channel: Channel, include_legacy: bool) -> Result<Value> {
    let addons: Vec<_> = if include_legacy {
        snapshot.data.iter_channel(channel).collect()
    } else {
        snapshot.data.listable(channel).collect()
    };

    let mut items = Vec::with_capacity(addons.len());
    for addon in addons {
        items.push(Value::Object(addon.to_mapping()?));
    }

    Ok(json!({
        "apiVersion": snapshot.api_version.to_string(),
        "fetchedAt": snapshot.fetched_at.to_string(),
        "total": items.len(),
        "items": items,
    }))
}

/// Handle `show <id>`
pub fn show(
    snapshot: &CatalogSnapshot,
    installed: &dyn InstalledAddons,
    channel: Channel,
    id: &str,
) -> Result<Value> {
    let addon = catalog::find(snapshot, channel, id)?;
    let counterpart = match addon.installed_counterpart(installed) {
        Some(model) => Value::Object(model.to_mapping()?),
        None => Value::Null,
    };

    let mapping = addon.to_mapping()?;

    Ok(json!({
        "listKey": addon.list_key(),
        "addon": mapping,
        "installed": counterpart,
    }))
}

/// Handle `verify <id> <file>`
pub fn verify(snapshot: &CatalogSnapshot, channel: Channel, id: &str, file: &Path) -> Result<Value> {
    let addon = catalog::find(snapshot, channel, id)?;
    let data = std::fs::read(file)?;
    catalog::verify_package(addon, &data)?;

    Ok(json!({
        "addonId": addon.addon_id(),
        "channel": addon.channel(),
        "sha256": addon.sha256(),
        "verified": true,
    }))
}
