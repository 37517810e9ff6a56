//! Block size tiers and the user-selected set of allowed tiers
//!
//! Tiers are totally ordered by their cell size, so "smallest allowed" and
//! "largest first" are both plain iteration over an ordered set.

use crate::io::error::PlanError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Size class of a placed block
///
/// Declaration order matches ascending cell size; the derived `Ord` relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BlockKind {
    /// 0.25 m edge, one grid cell
    #[serde(rename = "25cm")]
    Small,
    /// 0.50 m edge, 2x2 grid cells
    #[serde(rename = "50cm")]
    Medium,
    /// 2.5 m edge, 10x10 grid cells
    #[serde(rename = "2.5m")]
    Large,
}

impl BlockKind {
    /// Every tier in ascending cell-size order
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Number of grid cells along one edge of the block
    pub const fn cell_size(self) -> usize {
        match self {
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 10,
        }
    }

    /// Name used in plans and on the command line
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "25cm",
            Self::Medium => "50cm",
            Self::Large => "2.5m",
        }
    }

    /// Fixed block thickness in meters used for 3D placement
    pub const fn nominal_thickness(self) -> f64 {
        match self {
            Self::Small => 0.25,
            Self::Medium => 0.50,
            Self::Large => 2.50,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BlockKind {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(name))
            .ok_or_else(|| PlanError::InvalidAllowedType {
                value: name.to_string(),
            })
    }
}

/// Set of tiers the merger may emit
///
/// Order-independent and duplicate-free. An empty set is valid and makes the
/// merger produce no blocks at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowedTypes {
    kinds: BTreeSet<BlockKind>,
}

impl AllowedTypes {
    /// All three tiers
    pub fn all() -> Self {
        Self::from_kinds(BlockKind::ALL)
    }

    /// No tiers at all
    pub const fn none() -> Self {
        Self {
            kinds: BTreeSet::new(),
        }
    }

    /// Build from any collection of tiers, ignoring duplicates
    pub fn from_kinds(kinds: impl IntoIterator<Item = BlockKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    /// Parse tier names such as `["25cm", "2.5m"]`
    ///
    /// # Errors
    ///
    /// Returns `InvalidAllowedType` for the first name that is not a known tier
    pub fn parse<I, S>(names: I) -> crate::io::error::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let kinds = names
            .into_iter()
            .map(|name| name.as_ref().parse::<BlockKind>())
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self { kinds })
    }

    /// Test tier membership
    pub fn contains(&self, kind: BlockKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Test if no tier is allowed
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Number of allowed tiers
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Smallest allowed tier, used for cells no merge could claim
    pub fn fallback(&self) -> Option<BlockKind> {
        self.kinds.first().copied()
    }

    /// Allowed tiers from smallest to largest
    pub fn ascending(&self) -> impl Iterator<Item = BlockKind> + '_ {
        self.kinds.iter().copied()
    }

    /// Allowed tiers from largest to smallest, the merge order
    pub fn descending(&self) -> impl Iterator<Item = BlockKind> + '_ {
        self.kinds.iter().rev().copied()
    }
}

impl Default for AllowedTypes {
    fn default() -> Self {
        Self::all()
    }
}

impl FromStr for AllowedTypes {
    type Err = PlanError;

    /// Comma-separated tier names; an empty string means no tiers
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.split(',').map(str::trim).filter(|name| !name.is_empty()))
    }
}

impl fmt::Display for AllowedTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.ascending().map(BlockKind::label).collect();
        f.write_str(&names.join(","))
    }
}
