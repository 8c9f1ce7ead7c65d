/// A move reference in an enemy template.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveEntry {
    pub attack_id: String,
    #[cfg_attr(feature = "serde", serde(default = "default_weight"))]
    pub weight: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldown: i32,
}

#[cfg(feature = "serde")]
fn default_weight() -> i32 {
    1
}

impl MoveEntry {
    pub fn new(attack_id: impl Into<String>, weight: i32, cooldown: i32) -> Self {
        Self {
            attack_id: attack_id.into(),
            weight,
            cooldown,
        }
    }
}

/// A move in a live enemy's move-set, with its cooldown counter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyMove {
    pub attack_id: String,
    pub weight: i32,
    pub base_cooldown: i32,
    pub current_cooldown: i32,
}

impl EnemyMove {
    /// Ready to use, weight clamped to at least 1.
    pub fn from_entry(entry: &MoveEntry) -> Self {
        Self {
            attack_id: entry.attack_id.clone(),
            weight: entry.weight.max(1),
            base_cooldown: entry.cooldown.max(0),
            current_cooldown: 0,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.current_cooldown <= 0
    }

    /// Weight used by selection; never below 1.
    pub fn effective_weight(&self) -> i32 {
        self.weight.max(1)
    }
}
