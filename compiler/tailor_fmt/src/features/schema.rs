//! Feature metadata registry.
//!
//! Describes each column of a feature vector: what kind of value it holds,
//! how much a disagreement on it costs, and its name for diagnostics. The
//! standard schema is built once per process and shared through
//! [`FeatureSchema::global`]; a schema with different costs can be built
//! explicitly and passed by value.

use std::fmt;
use std::sync::OnceLock;

/// Number of columns in every feature vector.
pub const FEATURE_COUNT: usize = 12;

/// What a feature column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    /// A token type tag.
    Token,
    /// A parse-tree rule tag.
    Rule,
    /// A position among siblings.
    Index,
    /// Recorded for diagnostics; never compared.
    Info,
}

impl FeatureKind {
    /// Whether the column takes part in the L0 mismatch count.
    #[inline]
    pub fn is_categorical(self) -> bool {
        !matches!(self, FeatureKind::Info)
    }

    /// Whether the column takes part in the weighted distance.
    #[inline]
    pub fn is_weighted(self) -> bool {
        matches!(self, FeatureKind::Token | FeatureKind::Rule)
    }
}

/// One feature column, in vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Feature {
    Prev2Token,
    PrevToken,
    Token,
    NextToken,
    ParentRule,
    GrandparentRule,
    GreatGrandparentRule,
    GreatGreatGrandparentRule,
    PrevParentRule,
    CommonAncestorRule,
    ChildIndex,
    Depth,
}

impl Feature {
    /// Every column, in vector order.
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Prev2Token,
        Feature::PrevToken,
        Feature::Token,
        Feature::NextToken,
        Feature::ParentRule,
        Feature::GrandparentRule,
        Feature::GreatGrandparentRule,
        Feature::GreatGreatGrandparentRule,
        Feature::PrevParentRule,
        Feature::CommonAncestorRule,
        Feature::ChildIndex,
        Feature::Depth,
    ];

    /// Position of the column in a feature vector.
    #[inline]
    pub const fn column(self) -> usize {
        self as usize
    }

    /// The column's metadata in the standard schema.
    pub const fn standard(self) -> FeatureMetaData {
        use FeatureKind::{Index, Info, Rule, Token};
        let (kind, cost, name) = match self {
            Feature::Prev2Token => (Token, 1, "prev2_token"),
            Feature::PrevToken => (Token, 3, "prev_token"),
            Feature::Token => (Token, 3, "token"),
            Feature::NextToken => (Token, 2, "next_token"),
            Feature::ParentRule => (Rule, 2, "parent_rule"),
            Feature::GrandparentRule => (Rule, 1, "grandparent_rule"),
            Feature::GreatGrandparentRule => (Rule, 1, "great_grandparent_rule"),
            Feature::GreatGreatGrandparentRule => (Rule, 1, "great_great_grandparent_rule"),
            Feature::PrevParentRule => (Rule, 1, "prev_parent_rule"),
            Feature::CommonAncestorRule => (Rule, 1, "common_ancestor_rule"),
            Feature::ChildIndex => (Index, 0, "child_index"),
            Feature::Depth => (Info, 0, "depth"),
        };
        FeatureMetaData {
            kind,
            mismatch_cost: cost,
            name,
        }
    }
}

/// Descriptor of one feature column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureMetaData {
    pub kind: FeatureKind,
    /// Added to the weighted distance when two vectors disagree here.
    pub mismatch_cost: u32,
    pub name: &'static str,
}

/// Ordered column descriptors shared by a corpus and its queries.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FeatureSchema {
    columns: [FeatureMetaData; FEATURE_COUNT],
}

impl FeatureSchema {
    /// The standard column set and costs.
    pub fn standard() -> Self {
        FeatureSchema {
            columns: Feature::ALL.map(Feature::standard),
        }
    }

    /// The process-wide standard schema.
    pub fn global() -> &'static FeatureSchema {
        static GLOBAL_SCHEMA: OnceLock<FeatureSchema> = OnceLock::new();
        GLOBAL_SCHEMA.get_or_init(FeatureSchema::standard)
    }

    /// Same schema with a different mismatch cost for one column.
    #[must_use]
    pub fn with_cost(mut self, feature: Feature, cost: u32) -> Self {
        self.columns[feature.column()].mismatch_cost = cost;
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    #[inline]
    pub fn columns(&self) -> &[FeatureMetaData] {
        &self.columns
    }

    #[inline]
    pub fn get(&self, feature: Feature) -> &FeatureMetaData {
        &self.columns[feature.column()]
    }

    /// Column names in vector order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }
}

impl Default for FeatureSchema {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for FeatureSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.columns.iter().map(|c| (c.name, c.mismatch_cost)))
            .finish()
    }
}
