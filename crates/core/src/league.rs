//! League assignment: ranks friends by points and splits them into three tiers.
//!
//! Ranking is a pure function of the current friend snapshot. The split into
//! bands is governed by a [`LeaguePolicy`] so band sizes can be tuned without
//! touching the ranking rule.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Number of friends placed in the top league by the default policy.
pub const DEFAULT_TOP_BAND: usize = 3;
/// Number of friends placed in the middle league by the default policy.
pub const DEFAULT_MIDDLE_BAND: usize = 5;

// ---------------------------------------------------------------------------
// League types
// ---------------------------------------------------------------------------

/// The three fixed tiers, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeagueType {
    Primium,
    Prime,
    Primitives,
}

impl LeagueType {
    /// Presentation order: highest tier first.
    pub const ALL: [LeagueType; 3] = [Self::Primium, Self::Prime, Self::Primitives];

    pub fn title(self) -> &'static str {
        match self {
            Self::Primium => "Primium",
            Self::Prime => "Prime",
            Self::Primitives => "Primitives",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Primium => "The Elite",
            Self::Prime => "The Inner Circle",
            Self::Primitives => {
                "The Bottom Tier. Lucky if they get a \"like\" on their IG story."
            }
        }
    }
}

/// A computed league view. Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct League<T> {
    #[serde(rename = "type")]
    pub league_type: LeagueType,
    pub title: &'static str,
    pub description: &'static str,
    pub friends: Vec<T>,
}

impl<T> League<T> {
    fn new(league_type: LeagueType, friends: Vec<T>) -> Self {
        Self {
            league_type,
            title: league_type.title(),
            description: league_type.description(),
            friends,
        }
    }
}

// ---------------------------------------------------------------------------
// Ranking input
// ---------------------------------------------------------------------------

/// Anything that can be ranked into a league.
pub trait Rankable {
    fn points(&self) -> i64;
    fn created_at(&self) -> Timestamp;
    /// Insertion sequence, consulted when two creation timestamps are equal.
    fn creation_seq(&self) -> i64;
}

// ---------------------------------------------------------------------------
// Split policy
// ---------------------------------------------------------------------------

/// How the ranked sequence is cut into three contiguous bands.
///
/// Textual form (used by the `LEAGUE_POLICY` env var):
/// - `fixed:<top>,<middle>`: absolute band sizes, the bottom band takes the rest.
/// - `percent:<top>,<middle>`: band sizes as a rounded share of the friend count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaguePolicy {
    FixedSize { top: usize, middle: usize },
    Percentage { top: u8, middle: u8 },
}

impl Default for LeaguePolicy {
    fn default() -> Self {
        Self::FixedSize {
            top: DEFAULT_TOP_BAND,
            middle: DEFAULT_MIDDLE_BAND,
        }
    }
}

/// Concrete band sizes for a given friend count. Always sums to that count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandSizes {
    pub top: usize,
    pub middle: usize,
    pub bottom: usize,
}

impl LeaguePolicy {
    /// Build a percentage policy, rejecting shares that exceed 100% combined.
    pub fn percentage(top: u8, middle: u8) -> Result<Self, CoreError> {
        if u16::from(top) + u16::from(middle) > 100 {
            return Err(CoreError::Validation(format!(
                "League percentages must not exceed 100 combined (got {top} + {middle})"
            )));
        }
        Ok(Self::Percentage { top, middle })
    }

    /// Resolve the policy against `total` friends.
    pub fn band_sizes(&self, total: usize) -> BandSizes {
        let (top, middle) = match *self {
            Self::FixedSize { top, middle } => (top, middle),
            Self::Percentage { top, middle } => {
                (share_of(total, top), share_of(total, middle))
            }
        };
        let top = top.min(total);
        let middle = middle.min(total - top);
        BandSizes {
            top,
            middle,
            bottom: total - top - middle,
        }
    }
}

/// `round(total * pct / 100)`, rounding halves up.
fn share_of(total: usize, pct: u8) -> usize {
    (total * usize::from(pct) + 50) / 100
}

impl fmt::Display for LeaguePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedSize { top, middle } => write!(f, "fixed:{top},{middle}"),
            Self::Percentage { top, middle } => write!(f, "percent:{top},{middle}"),
        }
    }
}

impl FromStr for LeaguePolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            CoreError::Validation(format!(
                "Invalid league policy '{s}'. Expected 'fixed:<top>,<middle>' or 'percent:<top>,<middle>'"
            ))
        };

        let (kind, sizes) = s.trim().split_once(':').ok_or_else(invalid)?;
        let (top, middle) = sizes.split_once(',').ok_or_else(invalid)?;
        let (top, middle) = (top.trim(), middle.trim());

        match kind.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Self::FixedSize {
                top: top.parse().map_err(|_| invalid())?,
                middle: middle.parse().map_err(|_| invalid())?,
            }),
            "percent" => Self::percentage(
                top.parse().map_err(|_| invalid())?,
                middle.parse().map_err(|_| invalid())?,
            ),
            _ => Err(invalid()),
        }
    }
}

// ---------------------------------------------------------------------------
// Assignment
// ---------------------------------------------------------------------------

/// Sort friends into rank order: points descending, then earliest created.
///
/// The sort is stable and fully keyed, so equal inputs always give equal output.
pub fn rank<T: Rankable>(friends: &mut [T]) {
    friends.sort_by_key(|f| (Reverse(f.points()), f.created_at(), f.creation_seq()));
}

/// Partition `friends` into the three leagues, highest tier first.
///
/// Every friend lands in exactly one league; leagues may be empty.
pub fn assign_leagues<T: Rankable>(mut friends: Vec<T>, policy: &LeaguePolicy) -> Vec<League<T>> {
    rank(&mut friends);
    let sizes = policy.band_sizes(friends.len());

    let bottom = friends.split_off(sizes.top + sizes.middle);
    let middle = friends.split_off(sizes.top);
    let top = friends;

    LeagueType::ALL
        .into_iter()
        .zip([top, middle, bottom])
        .map(|(league_type, members)| League::new(league_type, members))
        .collect()
}
