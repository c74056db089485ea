//! Dependency relationship classification
//!
//! A `DepType` records why a package is installed relative to the root
//! project. The variants form a total order, weakest to strongest:
//!
//! `Dev` < `DevOptional` < `Optional` < `Prod` < `Root`
//!
//! When the same physical package is reached through several routes the
//! walker keeps the strongest classification it has seen.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::{Result, WalkerError};

/// Relationship of an installed package to the root project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepType {
    /// Needed at runtime
    Prod,
    /// Only needed to develop the root project
    Dev,
    /// Runtime dependency whose absence is tolerated
    Optional,
    /// Optional dependency reached through a dev-only route
    DevOptional,
    /// The package the walk started from
    Root,
}

impl DepType {
    /// All variants, weakest first
    pub const ALL: [DepType; 5] = [
        DepType::Dev,
        DepType::DevOptional,
        DepType::Optional,
        DepType::Prod,
        DepType::Root,
    ];

    /// Position in the necessity order
    pub const fn rank(self) -> u8 {
        match self {
            DepType::Dev => 0,
            DepType::DevOptional => 1,
            DepType::Optional => 2,
            DepType::Prod => 3,
            DepType::Root => 4,
        }
    }

    /// True if `self` represents a strictly stronger necessity than `other`
    pub fn is_greater_than(self, other: DepType) -> bool {
        self.rank() > other.rank()
    }

    /// True for both optional flavours
    pub fn is_optional(self) -> bool {
        matches!(self, DepType::Optional | DepType::DevOptional)
    }

    /// True for both dev flavours
    pub fn is_dev(self) -> bool {
        matches!(self, DepType::Dev | DepType::DevOptional)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DepType::Prod => "PROD",
            DepType::Dev => "DEV",
            DepType::Optional => "OPTIONAL",
            DepType::DevOptional => "DEV_OPTIONAL",
            DepType::Root => "ROOT",
        }
    }
}

impl PartialOrd for DepType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DepType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for DepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a dependency declared by a package whose own
/// classification is `parent`.
///
/// `declared` is the kind of edge being followed: `Prod` for `dependencies`,
/// `Optional` for `optionalDependencies`, `Dev` for `devDependencies`.
/// Optionality is sticky: everything below an optional package stays
/// optional. Declaring a child as `Root` is an internal defect and is
/// reported as `InvalidChildDepType`.
pub fn child_dep_type(parent: DepType, declared: DepType) -> Result<DepType> {
    if declared == DepType::Root {
        return Err(WalkerError::InvalidChildDepType {
            parent,
            child: declared,
        });
    }

    let child = match parent {
        DepType::Root => declared,
        DepType::Prod => {
            if declared == DepType::Optional {
                DepType::Optional
            } else {
                DepType::Prod
            }
        }
        DepType::Optional => DepType::Optional,
        DepType::DevOptional => DepType::DevOptional,
        DepType::Dev => {
            if declared == DepType::Optional {
                DepType::DevOptional
            } else {
                DepType::Dev
            }
        }
    };

    Ok(child)
}
