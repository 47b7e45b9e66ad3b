//! Construction of [`StoreAddonModel`] values from catalog JSON.

use serde_json::{Map, Value};
use tracing::debug;

use crate::channel::Channel;
use crate::collection::AddonCollection;
use crate::error::{ParseError, Result};
use crate::model::{AddonDetails, StoreAddonModel};
use crate::version::MajorMinorPatch;

fn required_str(addon: &Map<String, Value>, key: &str) -> Result<String> {
    match addon.get(key) {
        None | Some(Value::Null) => Err(ParseError::MissingField(key.to_string())),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ParseError::invalid(key, format!("expected a string, got {}", other))),
    }
}

fn optional_str(addon: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match addon.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ParseError::invalid(key, format!("expected a string, got {}", other))),
    }
}

fn optional_bool(addon: &Map<String, Value>, key: &str) -> Result<bool> {
    match addon.get(key) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(ParseError::invalid(key, format!("expected a boolean, got {}", other))),
    }
}

fn required_version(addon: &Map<String, Value>, key: &str) -> Result<MajorMinorPatch> {
    let record = match addon.get(key) {
        None | Some(Value::Null) => return Err(ParseError::MissingField(key.to_string())),
        Some(Value::Object(record)) => record,
        Some(other) => {
            return Err(ParseError::invalid(key, format!("expected a version object, got {}", other)))
        }
    };

    let component = |name: &str| -> Result<u32> {
        let field = format!("{}.{}", key, name);
        let value = record
            .get(name)
            .ok_or_else(|| ParseError::MissingField(field.clone()))?;
        value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| ParseError::invalid(&field, format!("expected a non-negative integer, got {}", value)))
    };

    Ok(MajorMinorPatch::new(
        component("major")?,
        component("minor")?,
        component("patch")?,
    ))
}

fn stored_channel(addon: &Map<String, Value>) -> Result<Channel> {
    let channel: Channel = required_str(addon, "channel")?.parse()?;
    if channel.is_wildcard() {
        return Err(ParseError::WildcardChannel);
    }
    Ok(channel)
}

/// Builds a store model from one catalog entry.
///
/// Required keys: `addonId`, `displayName`, `description`, `publisher`,
/// `channel`, `addonVersionName`, `addonVersionNumber`, `license`,
/// `sourceURL`, `URL`, `sha256`, `minNVDAVersion`, `lastTestedVersion`.
/// `homepage`, `licenseURL` and `legacy` are optional; an explicit `null`
/// counts as absent.
pub fn store_model_from_value(value: &Value) -> Result<StoreAddonModel> {
    let addon = value
        .as_object()
        .ok_or_else(|| ParseError::invalid("addon", format!("expected an object, got {}", value)))?;

    Ok(StoreAddonModel {
        details: AddonDetails {
            addon_id: required_str(addon, "addonId")?,
            display_name: required_str(addon, "displayName")?,
            description: required_str(addon, "description")?,
            publisher: required_str(addon, "publisher")?,
            addon_version_name: required_str(addon, "addonVersionName")?,
            channel: stored_channel(addon)?,
            homepage: optional_str(addon, "homepage")?,
            min_nvda_version: required_version(addon, "minNVDAVersion")?,
            last_tested_version: required_version(addon, "lastTestedVersion")?,
            legacy: optional_bool(addon, "legacy")?,
        },
        license: required_str(addon, "license")?,
        license_url: optional_str(addon, "licenseURL")?,
        source_url: required_str(addon, "sourceURL")?,
        download_url: required_str(addon, "URL")?,
        sha256: required_str(addon, "sha256")?,
        addon_version_number: required_version(addon, "addonVersionNumber")?,
    })
}

impl TryFrom<Value> for StoreAddonModel {
    type Error = ParseError;

    fn try_from(value: Value) -> Result<Self> {
        store_model_from_value(&value)
    }
}

/// Builds a store model from a mapping such as one produced by
/// [`AddonMetadata::to_mapping`](crate::AddonMetadata::to_mapping).
pub fn store_model_from_mapping(mapping: Map<String, Value>) -> Result<StoreAddonModel> {
    store_model_from_value(&Value::Object(mapping))
}

/// Parses catalog JSON text into a collection of store models.
///
/// See [`parse_catalog_value`].
pub fn parse_catalog(json: &str) -> Result<AddonCollection<StoreAddonModel>> {
    let value: Value = serde_json::from_str(json)?;
    parse_catalog_value(&value)
}

/// Indexes every entry of a catalog array by channel and identifier.
///
/// Entries whose identifiers differ only in case share a slot; the later
/// entry in the array wins. The first malformed entry fails the whole
/// call and nothing parsed before it is returned.
pub fn parse_catalog_value(value: &Value) -> Result<AddonCollection<StoreAddonModel>> {
    let entries = value.as_array().ok_or(ParseError::NotAnArray)?;
    let mut collection = AddonCollection::new();

    for (index, entry) in entries.iter().enumerate() {
        let model = store_model_from_value(entry)
            .inspect_err(|e| debug!("Rejecting catalog: entry {} is invalid: {}", index, e))?;

        if let Some(previous) = collection.insert(model)? {
            debug!(
                "Catalog entry {} replaces {} in channel {}",
                index, previous.details.addon_id, previous.details.channel
            );
        }
    }

    debug!("Parsed catalog: {} entries", collection.len());
    Ok(collection)
}
