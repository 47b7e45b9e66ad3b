//! Core metadata types for the add-on store.
//!
//! This crate turns the two sources of add-on metadata into one queryable
//! shape: entries of the remote catalog ([`StoreAddonModel`]) and manifests
//! of locally installed add-ons ([`GuiAddonModel`]). Both implement
//! [`AddonMetadata`].
//!
//! # Overview
//!
//! - [`MajorMinorPatch`] - Exact, ordered version value
//! - [`Channel`] - Distribution channel, with [`Channel::All`] as a query wildcard
//! - [`AddonCollection`] - Channel-partitioned, case-insensitive index
//! - [`CatalogSnapshot`] - One timestamped catalog fetch result
//! - [`parse_catalog`] - Catalog JSON to [`AddonCollection`]
//! - [`gui_model_from_manifest`] - Installed manifest to [`GuiAddonModel`]
//!
//! Everything here is synchronous and free of I/O. Fetching the catalog,
//! reading manifests from disk and tracking installed add-ons happen
//! elsewhere and reach this crate through [`ManifestSource`] and
//! [`InstalledAddons`].
//!
//! # Example
//!
//! ```
//! use addonstore_core::{parse_catalog, AddonMetadata, Channel};
//!
//! let catalog = parse_catalog(r#"[{
//!     "addonId": "NVSpeechPlayer", "channel": "stable",
//!     "displayName": "Speech Player", "description": "d", "publisher": "p",
//!     "addonVersionName": "1.0",
//!     "addonVersionNumber": {"major": 1, "minor": 0, "patch": 0},
//!     "license": "GPL", "sourceURL": "http://x", "URL": "http://y", "sha256": "ab12",
//!     "minNVDAVersion": {"major": 2019, "minor": 1, "patch": 0},
//!     "lastTestedVersion": {"major": 2023, "minor": 1, "patch": 0}
//! }]"#).unwrap();
//!
//! let player = catalog.get(Channel::Stable, "nvspeechplayer").unwrap();
//! assert_eq!(player.addon_id(), "NVSpeechPlayer");
//! assert!(!player.legacy());
//! assert_eq!(player.homepage(), None);
//! ```

pub mod catalog;
pub mod channel;
pub mod collection;
pub mod error;
pub mod manifest;
pub mod model;
pub mod snapshot;
pub mod version;

pub use catalog::{parse_catalog, parse_catalog_value, store_model_from_mapping, store_model_from_value};
pub use channel::Channel;
pub use collection::{AddonCollection, ChannelIndex};
pub use error::{ParseError, Result};
pub use manifest::{gui_model_from_manifest, ManifestData, ManifestSource};
pub use model::{AddonDetails, AddonMetadata, GuiAddonModel, InstalledAddons, StoreAddonModel};
pub use snapshot::{CatalogApiVersion, CatalogSnapshot};
pub use version::MajorMinorPatch;
