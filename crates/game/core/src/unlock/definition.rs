//! Immutable unlock templates shared by every character.

use std::collections::BTreeMap;

use crate::gate::Requirements;
use crate::progression::PointPool;
use crate::stats::{Attribute, ResourceKind};

/// Skills are multi-rank and bought with skill points; perks are single-rank and bought
/// with perk points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnlockKind {
    Skill,
    Perk,
}

impl UnlockKind {
    pub fn pool(self) -> PointPool {
        match self {
            UnlockKind::Skill => PointPool::Skill,
            UnlockKind::Perk => PointPool::Perk,
        }
    }
}

/// Bonuses granted by a single rank. Applied once per rank gained.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RankBonus {
    pub stats: BTreeMap<Attribute, i32>,
    pub resources: BTreeMap<ResourceKind, i32>,
}

impl RankBonus {
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty() && self.resources.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnlockDefinition {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub kind: UnlockKind,
    #[cfg_attr(feature = "serde", serde(default = "default_one"))]
    pub max_rank: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_one"))]
    pub base_cost: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub requirements: Requirements,
    /// Ids of same-kind definitions that must have rank > 0.
    #[cfg_attr(feature = "serde", serde(default))]
    pub prerequisites: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub per_rank: RankBonus,
}

#[cfg(feature = "serde")]
fn default_one() -> u32 {
    1
}

impl UnlockDefinition {
    /// A rank-1 skill costing one point, without requirements.
    pub fn skill(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_kind(UnlockKind::Skill, id, name)
    }

    /// A perk costing one perk point, without requirements.
    pub fn perk(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_kind(UnlockKind::Perk, id, name)
    }

    fn with_kind(kind: UnlockKind, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            kind,
            max_rank: 1,
            base_cost: 1,
            requirements: Requirements::none(),
            prerequisites: Vec::new(),
            per_rank: RankBonus::default(),
        }
    }

    pub fn with_max_rank(mut self, max_rank: u32) -> Self {
        self.max_rank = max_rank;
        self
    }

    pub fn with_base_cost(mut self, cost: u32) -> Self {
        self.base_cost = cost;
        self
    }

    pub fn with_requirements(mut self, requirements: Requirements) -> Self {
        self.requirements = requirements;
        self
    }

    pub fn with_prerequisite(mut self, id: impl Into<String>) -> Self {
        self.prerequisites.push(id.into());
        self
    }

    pub fn with_stat_bonus(mut self, attr: Attribute, per_rank: i32) -> Self {
        self.per_rank.stats.insert(attr, per_rank);
        self
    }

    pub fn with_resource_bonus(mut self, kind: ResourceKind, per_rank: i32) -> Self {
        self.per_rank.resources.insert(kind, per_rank);
        self
    }

    /// Points needed to go from `current_rank` to the next one.
    pub fn next_rank_cost(&self, current_rank: u32) -> u32 {
        self.base_cost.saturating_mul(current_rank.saturating_add(1))
    }

    pub fn pool(&self) -> PointPool {
        self.kind.pool()
    }
}
