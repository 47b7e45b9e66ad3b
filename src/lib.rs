//! Add-on store catalog tooling.
//!
//! Loads a catalog file into a [`CatalogSnapshot`], resolves installed
//! counterparts through a [`MemoryRegistry`], and verifies downloaded
//! packages against catalog checksums. Model types live in
//! [`addonstore_core`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use addonstore::{catalog, commands, MemoryRegistry};
//! use addonstore_core::{CatalogApiVersion, Channel};
//!
//! let snapshot = catalog::load_snapshot(Path::new("catalog.json"), CatalogApiVersion::Latest)?;
//! let registry = MemoryRegistry::new();
//! let shown = commands::show(&snapshot, &registry, Channel::All, "clock")?;
//! println!("{}", serde_json::to_string_pretty(&shown)?);
//! ```

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod registry;

pub use addonstore_core::{CatalogSnapshot, Channel};
pub use config::Config;
pub use error::{Error, Result};
pub use registry::MemoryRegistry;
