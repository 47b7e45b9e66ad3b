//! Construction of [`GuiAddonModel`] from installed add-on manifests.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::error::{ParseError, Result};
use crate::model::{AddonDetails, GuiAddonModel};
use crate::version::MajorMinorPatch;

/// Manifests written by older tooling store a missing URL as this text.
const NONE_SENTINEL: &str = "None";

/// Read access to an installed add-on's manifest.
///
/// The manifest file format is handled elsewhere; this is the view of an
/// already-parsed manifest that model construction needs.
pub trait ManifestSource {
    /// The add-on identifier.
    fn name(&self) -> &str;

    fn version(&self) -> &str;

    fn minimum_api_version(&self) -> (u32, u32, u32);

    fn last_tested_api_version(&self) -> (u32, u32, u32);

    /// A raw manifest entry such as `summary`, `description`, `author` or `url`.
    fn manifest_field(&self, key: &str) -> Option<&str>;
}

/// A plain, already-parsed manifest record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestData {
    pub name: String,
    pub version: String,
    #[serde(rename = "minimumAPIVersion")]
    pub minimum_api_version: (u32, u32, u32),
    #[serde(rename = "lastTestedAPIVersion")]
    pub last_tested_api_version: (u32, u32, u32),
    #[serde(default)]
    pub manifest: HashMap<String, String>,
}

impl ManifestSource for ManifestData {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn minimum_api_version(&self) -> (u32, u32, u32) {
        self.minimum_api_version
    }

    fn last_tested_api_version(&self) -> (u32, u32, u32) {
        self.last_tested_api_version
    }

    fn manifest_field(&self, key: &str) -> Option<&str> {
        self.manifest.get(key).map(String::as_str)
    }
}

fn required<'a, M: ManifestSource + ?Sized>(manifest: &'a M, key: &str) -> Result<&'a str> {
    manifest
        .manifest_field(key)
        .ok_or_else(|| ParseError::MissingField(format!("manifest.{}", key)))
}

/// Builds the GUI model for an installed add-on.
///
/// The channel is always [`Channel::External`] and `legacy` is always
/// `false`; manifests carry neither.
pub fn gui_model_from_manifest<M: ManifestSource + ?Sized>(manifest: &M) -> Result<GuiAddonModel> {
    let homepage = manifest
        .manifest_field("url")
        .filter(|url| *url != NONE_SENTINEL)
        .map(str::to_string);

    Ok(GuiAddonModel {
        details: AddonDetails {
            addon_id: manifest.name().to_string(),
            display_name: required(manifest, "summary")?.to_string(),
            description: required(manifest, "description")?.to_string(),
            publisher: required(manifest, "author")?.to_string(),
            addon_version_name: manifest.version().to_string(),
            channel: Channel::External,
            homepage,
            min_nvda_version: MajorMinorPatch::from(manifest.minimum_api_version()),
            last_tested_version: MajorMinorPatch::from(manifest.last_tested_api_version()),
            legacy: false,
        },
    })
}
