//! Channel-partitioned, case-insensitive index of add-on models.
//!
//! Installed add-ons live on a case-insensitive path, so `"Foo"` and
//! `"foo"` are the same add-on. Each channel partition is keyed on the
//! lower-cased identifier; the model keeps the original casing.

use std::collections::BTreeMap;

use crate::channel::Channel;
use crate::error::{ParseError, Result};
use crate::model::AddonMetadata;

fn slot_key(addon_id: &str) -> String {
    addon_id.to_lowercase()
}

/// Models of a single channel, keyed case-insensitively by identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelIndex<M> {
    entries: BTreeMap<String, M>,
}

impl<M> Default for ChannelIndex<M> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<M: AddonMetadata> ChannelIndex<M> {
    /// Stores `model`, returning the entry it displaced, if any.
    pub fn insert(&mut self, model: M) -> Option<M> {
        self.entries.insert(slot_key(model.addon_id()), model)
    }

    pub fn get(&self, addon_id: &str) -> Option<&M> {
        self.entries.get(&slot_key(addon_id))
    }

    pub fn contains(&self, addon_id: &str) -> bool {
        self.entries.contains_key(&slot_key(addon_id))
    }

    pub fn remove(&mut self, addon_id: &str) -> Option<M> {
        self.entries.remove(&slot_key(addon_id))
    }

    /// Models in lower-cased identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &M> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Add-on models indexed by channel, then by case-insensitive identifier.
///
/// A partition exists for every channel in [`Channel::STORED`] and never
/// for [`Channel::All`], which is accepted by the query methods as a
/// wildcard.
///
/// # Example
///
/// ```
/// use addonstore_core::{parse_catalog, AddonMetadata, Channel};
///
/// let json = r#"[{
///     "addonId": "Clock", "channel": "stable", "displayName": "Clock",
///     "description": "d", "publisher": "p", "addonVersionName": "1.0",
///     "addonVersionNumber": {"major": 1, "minor": 0, "patch": 0},
///     "license": "GPL", "sourceURL": "http://x", "URL": "http://y", "sha256": "ab12",
///     "minNVDAVersion": {"major": 2019, "minor": 3, "patch": 0},
///     "lastTestedVersion": {"major": 2023, "minor": 1, "patch": 0}
/// }]"#;
///
/// let catalog = parse_catalog(json).unwrap();
/// let clock = catalog.get(Channel::Stable, "CLOCK").unwrap();
/// assert_eq!(clock.addon_id(), "Clock");
/// assert!(catalog.get(Channel::All, "clock").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonCollection<M> {
    channels: BTreeMap<Channel, ChannelIndex<M>>,
}

impl<M> Default for AddonCollection<M> {
    fn default() -> Self {
        Self {
            channels: Channel::STORED
                .into_iter()
                .map(|channel| (channel, ChannelIndex::default()))
                .collect(),
        }
    }
}

impl<M: AddonMetadata> AddonCollection<M> {
    /// Creates a collection with one empty partition per stored channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `model` under its own channel, replacing any entry whose
    /// identifier differs only in case. Returns the displaced entry.
    ///
    /// Fails if the model claims the wildcard channel.
    pub fn insert(&mut self, model: M) -> Result<Option<M>> {
        let index = self
            .channels
            .get_mut(&model.channel())
            .ok_or(ParseError::WildcardChannel)?;
        Ok(index.insert(model))
    }

    /// Looks up an entry. [`Channel::All`] searches the stored channels
    /// in [`Channel::STORED`] order and returns the first match.
    pub fn get(&self, channel: Channel, addon_id: &str) -> Option<&M> {
        self.partitions(channel)
            .find_map(|index| index.get(addon_id))
    }

    /// Returns the partition for `channel`, or `None` for the wildcard.
    pub fn channel(&self, channel: Channel) -> Option<&ChannelIndex<M>> {
        self.channels.get(&channel)
    }

    pub fn channel_mut(&mut self, channel: Channel) -> Option<&mut ChannelIndex<M>> {
        self.channels.get_mut(&channel)
    }

    /// All entries, partition by partition.
    pub fn iter(&self) -> impl Iterator<Item = &M> {
        self.channels.values().flat_map(|index| index.iter())
    }

    /// Entries selected by a channel query.
    pub fn iter_channel(&self, channel: Channel) -> impl Iterator<Item = &M> {
        self.partitions(channel).flat_map(|index| index.iter())
    }

    /// Entries not flagged as legacy, for normal listing.
    pub fn listable(&self, channel: Channel) -> impl Iterator<Item = &M> {
        self.iter_channel(channel).filter(|model| !model.legacy())
    }

    /// Moves every entry of `other` into `self`. Entries from `other` win.
    pub fn merge(&mut self, other: AddonCollection<M>) {
        for (channel, index) in other.channels {
            let target = self.channels.entry(channel).or_default();
            for model in index.entries.into_values() {
                target.insert(model);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.channels.values().map(ChannelIndex::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.values().all(ChannelIndex::is_empty)
    }

    fn partitions(&self, channel: Channel) -> impl Iterator<Item = &ChannelIndex<M>> {
        self.channels
            .iter()
            .filter(move |(stored, _)| stored.matches(channel))
            .map(|(_, index)| index)
    }
}
