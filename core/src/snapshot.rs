use std::fmt;
use std::str::FromStr;

use jiff::{SignedDuration, Timestamp};

use crate::channel::Channel;
use crate::collection::AddonCollection;
use crate::error::ParseError;
use crate::model::StoreAddonModel;
use crate::version::MajorMinorPatch;

/// Host API version a catalog was requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogApiVersion {
    Version(MajorMinorPatch),
    /// The catalog for the newest API version, whatever it is.
    Latest,
}

impl CatalogApiVersion {
    pub const LATEST: &'static str = "latest";

    pub fn version(&self) -> Option<MajorMinorPatch> {
        match self {
            CatalogApiVersion::Version(v) => Some(*v),
            CatalogApiVersion::Latest => None,
        }
    }
}

impl fmt::Display for CatalogApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogApiVersion::Version(v) => write!(f, "{}", v),
            CatalogApiVersion::Latest => f.write_str(Self::LATEST),
        }
    }
}

impl FromStr for CatalogApiVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == Self::LATEST {
            Ok(CatalogApiVersion::Latest)
        } else {
            s.parse().map(CatalogApiVersion::Version)
        }
    }
}

impl From<MajorMinorPatch> for CatalogApiVersion {
    fn from(v: MajorMinorPatch) -> Self {
        CatalogApiVersion::Version(v)
    }
}

/// The result of one successful catalog fetch.
///
/// A snapshot is not updated in place; a later fetch produces a new one
/// that replaces it wholesale.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub data: AddonCollection<StoreAddonModel>,
    pub fetched_at: Timestamp,
    pub api_version: CatalogApiVersion,
}

impl CatalogSnapshot {
    /// Creates a snapshot stamped with the current time.
    pub fn new(data: AddonCollection<StoreAddonModel>, api_version: CatalogApiVersion) -> Self {
        Self::with_fetched_at(data, api_version, Timestamp::now())
    }

    pub fn with_fetched_at(
        data: AddonCollection<StoreAddonModel>,
        api_version: CatalogApiVersion,
        fetched_at: Timestamp,
    ) -> Self {
        Self {
            data,
            fetched_at,
            api_version,
        }
    }

    pub fn age(&self, now: Timestamp) -> SignedDuration {
        now.duration_since(self.fetched_at)
    }

    /// Returns `true` once the snapshot is older than `ttl`.
    pub fn is_expired(&self, now: Timestamp, ttl: SignedDuration) -> bool {
        self.age(now) > ttl
    }

    pub fn get(&self, channel: Channel, addon_id: &str) -> Option<&StoreAddonModel> {
        self.data.get(channel, addon_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_api_version_sentinel() {
        assert_eq!("latest".parse::<CatalogApiVersion>().unwrap(), CatalogApiVersion::Latest);
        assert_eq!(
            "2023.1".parse::<CatalogApiVersion>().unwrap(),
            CatalogApiVersion::Version(MajorMinorPatch::new(2023, 1, 0))
        );
        assert!("newest".parse::<CatalogApiVersion>().is_err());
        assert_eq!(CatalogApiVersion::Latest.to_string(), "latest");
        assert_eq!(CatalogApiVersion::Latest.version(), None);
    }

    #[test]
    fn expires_after_ttl() {
        let fetched_at = Timestamp::from_second(1_700_000_000).unwrap();
        let snapshot = CatalogSnapshot::with_fetched_at(
            AddonCollection::new(),
            CatalogApiVersion::Latest,
            fetched_at,
        );
        let ttl = SignedDuration::from_hours(6);

        let soon = Timestamp::from_second(1_700_000_000 + 60).unwrap();
        let later = Timestamp::from_second(1_700_000_000 + 7 * 3600).unwrap();
        assert_eq!(snapshot.age(soon), SignedDuration::from_secs(60));
        assert!(!snapshot.is_expired(soon, ttl));
        assert!(snapshot.is_expired(later, ttl));
    }
}
