use std::collections::BTreeMap;

/// Per-character ranks keyed by definition id. Absent ids are rank 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnlockProgress {
    ranks: BTreeMap<String, u32>,
}

impl UnlockProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rank(&self, id: &str) -> u32 {
        self.ranks.get(id).copied().unwrap_or(0)
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.rank(id) > 0
    }

    /// Returns the new rank.
    pub fn increment(&mut self, id: &str) -> u32 {
        let rank = self.ranks.entry(id.to_owned()).or_insert(0);
        *rank += 1;
        *rank
    }

    pub fn set_rank(&mut self, id: impl Into<String>, rank: u32) {
        let id = id.into();
        if rank == 0 {
            self.ranks.remove(&id);
        } else {
            self.ranks.insert(id, rank);
        }
    }

    /// Unlocked entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.ranks.iter().map(|(id, rank)| (id.as_str(), *rank))
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}
