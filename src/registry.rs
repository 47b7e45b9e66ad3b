use std::collections::HashMap;

use addonstore_core::{gui_model_from_manifest, AddonMetadata, GuiAddonModel, InstalledAddons, ManifestSource};

use crate::error::Result;

pub mod fs;

/// In-memory registry of installed add-ons, keyed case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    addons: HashMap<String, GuiAddonModel>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from installed manifests.
    ///
    /// Fails on the first manifest that lacks a required field.
    pub fn from_manifests<'a, M, I>(manifests: I) -> Result<Self>
    where
        M: ManifestSource + 'a,
        I: IntoIterator<Item = &'a M>,
    {
        let mut registry = Self::new();
        for manifest in manifests {
            registry.insert(gui_model_from_manifest(manifest)?);
        }
        Ok(registry)
    }

    /// Adds an installed add-on, returning the one it replaced.
    pub fn insert(&mut self, model: GuiAddonModel) -> Option<GuiAddonModel> {
        self.addons.insert(model.addon_id().to_lowercase(), model)
    }

    pub fn len(&self) -> usize {
        self.addons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GuiAddonModel> {
        self.addons.values()
    }
}

impl InstalledAddons for MemoryRegistry {
    fn installed(&self, addon_id: &str) -> Option<GuiAddonModel> {
        self.addons.get(&addon_id.to_lowercase()).cloned()
    }
}
