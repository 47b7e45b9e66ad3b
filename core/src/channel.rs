use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Distribution channel an add-on entry belongs to.
///
/// [`Channel::All`] is a query wildcard. It is never the channel of a
/// stored entry and never a partition of an [`AddonCollection`].
///
/// [`AddonCollection`]: crate::AddonCollection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Stable,
    External,
    Unstable,
    All,
}

impl Channel {
    /// The channels that partition stored data, in lookup order.
    pub const STORED: [Channel; 3] = [Channel::Stable, Channel::External, Channel::Unstable];

    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Stable => "stable",
            Channel::External => "external",
            Channel::Unstable => "unstable",
            Channel::All => "all",
        }
    }

    pub fn is_wildcard(self) -> bool {
        self == Channel::All
    }

    /// Returns `true` if an entry in `self` is selected by a query for `query`.
    pub fn matches(self, query: Channel) -> bool {
        query.is_wildcard() || self == query
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stable" => Ok(Channel::Stable),
            "external" => Ok(Channel::External),
            "unstable" => Ok(Channel::Unstable),
            "all" => Ok(Channel::All),
            _ => Err(ParseError::UnknownChannel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_channels() {
        for channel in Channel::STORED {
            assert_eq!(channel.as_str().parse::<Channel>().unwrap(), channel);
        }
        assert_eq!("all".parse::<Channel>().unwrap(), Channel::All);
    }

    #[test]
    fn rejects_unknown_channel() {
        let err = "bogus".parse::<Channel>().unwrap_err();
        assert!(err.is_unknown_channel());
        // Channel names are matched exactly.
        assert!("Stable".parse::<Channel>().is_err());
    }

    #[test]
    fn stored_channels_exclude_wildcard() {
        assert!(!Channel::STORED.contains(&Channel::All));
        assert!(Channel::Stable.matches(Channel::All));
        assert!(Channel::Stable.matches(Channel::Stable));
        assert!(!Channel::Stable.matches(Channel::Unstable));
    }
}
