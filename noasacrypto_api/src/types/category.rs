//! The built-in category vocabulary.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A reason category known at build time.
///
/// The server is authoritative on which categories exist; this set only
/// offers typed, documented inputs. Raw strings are accepted wherever a
/// category is, so a category added server-side stays reachable.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "rug-check")]
    RugCheck,

    #[serde(rename = "diamond-hands")]
    DiamondHands,

    #[serde(rename = "slippage-stories")]
    SlippageStories,

    #[serde(rename = "chain-switcher")]
    ChainSwitcher,

    #[serde(rename = "hodl-doubts")]
    HodlDoubts,

    #[serde(rename = "gas-excuses")]
    GasExcuses,

    #[serde(rename = "rug-survivor")]
    RugSurvivor,

    #[serde(rename = "luna-collapse")]
    LunaCollapse,

    #[serde(rename = "nft-utility")]
    NftUtility,

    #[serde(rename = "whale-dumps")]
    WhaleDumps,

    #[serde(rename = "altcoin-season")]
    AltcoinSeason,

    #[serde(rename = "scam-detector")]
    ScamDetector,
}

impl Category {
    /// Every category, in the order the API documents them.
    pub const ALL: [Category; 12] = [
        Category::RugCheck,
        Category::DiamondHands,
        Category::SlippageStories,
        Category::ChainSwitcher,
        Category::HodlDoubts,
        Category::GasExcuses,
        Category::RugSurvivor,
        Category::LunaCollapse,
        Category::NftUtility,
        Category::WhaleDumps,
        Category::AltcoinSeason,
        Category::ScamDetector,
    ];

    /// The identifier used in request paths and in `categoryId`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::RugCheck => "rug-check",
            Category::DiamondHands => "diamond-hands",
            Category::SlippageStories => "slippage-stories",
            Category::ChainSwitcher => "chain-switcher",
            Category::HodlDoubts => "hodl-doubts",
            Category::GasExcuses => "gas-excuses",
            Category::RugSurvivor => "rug-survivor",
            Category::LunaCollapse => "luna-collapse",
            Category::NftUtility => "nft-utility",
            Category::WhaleDumps => "whale-dumps",
            Category::AltcoinSeason => "altcoin-season",
            Category::ScamDetector => "scam-detector",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Returned when a string is not one of the built-in category ids.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
