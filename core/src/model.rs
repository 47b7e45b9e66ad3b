//! Add-on metadata models.
//!
//! Both model kinds share [`AddonDetails`] by composition and expose it
//! through the [`AddonMetadata`] trait, so listing and compatibility code
//! can be written once over either kind.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::channel::Channel;
use crate::version::MajorMinorPatch;

/// Fields common to every add-on that can be shown in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonDetails {
    /// Identifier with its original casing. Identity is case-insensitive.
    pub addon_id: String,
    pub display_name: String,
    pub description: String,
    pub publisher: String,
    /// Display label for the version; never compared.
    pub addon_version_name: String,
    pub channel: Channel,
    pub homepage: Option<String>,
    /// Oldest host API version the add-on runs on.
    #[serde(rename = "minNVDAVersion")]
    pub min_nvda_version: MajorMinorPatch,
    /// Newest host API version the add-on was tested against.
    pub last_tested_version: MajorMinorPatch,
    /// Known-invalid metadata. Such entries stay representable but are
    /// kept out of normal listing and selection.
    pub legacy: bool,
}

/// Looks up the installed counterpart of a catalog entry.
///
/// Implementations must treat `addon_id` case-insensitively.
pub trait InstalledAddons {
    fn installed(&self, addon_id: &str) -> Option<GuiAddonModel>;
}

/// Accessors shared by every displayable add-on model.
pub trait AddonMetadata: Serialize {
    fn details(&self) -> &AddonDetails;

    fn addon_id(&self) -> &str {
        &self.details().addon_id
    }

    /// The case-preserved identifier.
    fn identifier(&self) -> &str {
        self.addon_id()
    }

    /// Name used by compatibility checks; same as [`identifier`](Self::identifier).
    fn name(&self) -> &str {
        self.addon_id()
    }

    fn display_name(&self) -> &str {
        &self.details().display_name
    }

    fn description(&self) -> &str {
        &self.details().description
    }

    fn publisher(&self) -> &str {
        &self.details().publisher
    }

    fn addon_version_name(&self) -> &str {
        &self.details().addon_version_name
    }

    fn channel(&self) -> Channel {
        self.details().channel
    }

    fn homepage(&self) -> Option<&str> {
        self.details().homepage.as_deref()
    }

    fn minimum_api_version(&self) -> MajorMinorPatch {
        self.details().min_nvda_version
    }

    fn last_tested_api_version(&self) -> MajorMinorPatch {
        self.details().last_tested_version
    }

    fn legacy(&self) -> bool {
        self.details().legacy
    }

    /// Identity of the entry as a GUI list item, e.g. `"clock-stable"`.
    ///
    /// Not a storage key: storage is keyed on the lower-cased identifier
    /// within a channel partition.
    fn list_key(&self) -> String {
        format!("{}-{}", self.addon_id(), self.channel())
    }

    /// Flat key/value form suitable for JSON re-encoding.
    ///
    /// Version fields are expanded to `{"major", "minor", "patch"}` objects.
    fn to_mapping(&self) -> serde_json::Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(serde::ser::Error::custom(format!(
                "expected an object, serialized to {}",
                other
            ))),
        }
    }

    /// The installed add-on with the same identifier, if any.
    fn installed_counterpart(&self, installed: &dyn InstalledAddons) -> Option<GuiAddonModel> {
        installed.installed(self.addon_id())
    }
}

/// Add-on metadata derived from a locally installed manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuiAddonModel {
    #[serde(flatten)]
    pub details: AddonDetails,
}

impl AddonMetadata for GuiAddonModel {
    fn details(&self) -> &AddonDetails {
        &self.details
    }
}

/// Add-on metadata from the remote catalog.
///
/// Deserializing goes through [`store_model_from_value`], so it applies
/// the same checks as catalog ingestion.
///
/// [`store_model_from_value`]: crate::store_model_from_value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct StoreAddonModel {
    #[serde(flatten)]
    pub details: AddonDetails,
    pub license: String,
    #[serde(rename = "licenseURL")]
    pub license_url: Option<String>,
    #[serde(rename = "sourceURL")]
    pub source_url: String,
    #[serde(rename = "URL")]
    pub download_url: String,
    /// Lowercase hex SHA-256 of the downloadable package.
    pub sha256: String,
    /// The comparable version; `addon_version_name` is display-only.
    #[serde(rename = "addonVersionNumber")]
    pub addon_version_number: MajorMinorPatch,
}

impl StoreAddonModel {
    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn license_url(&self) -> Option<&str> {
        self.license_url.as_deref()
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn download_url(&self) -> &str {
        &self.download_url
    }

    pub fn sha256(&self) -> &str {
        &self.sha256
    }

    pub fn addon_version_number(&self) -> MajorMinorPatch {
        self.addon_version_number
    }

    /// Compares a hex digest against the catalog checksum, ignoring case.
    pub fn matches_checksum(&self, hex_digest: &str) -> bool {
        self.sha256.eq_ignore_ascii_case(hex_digest.trim())
    }
}

impl AddonMetadata for StoreAddonModel {
    fn details(&self) -> &AddonDetails {
        &self.details
    }
}
