//! Playable races.

use std::collections::BTreeMap;

use crate::stats::Attribute;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Race {
    EarthPony,
    Unicorn,
    Pegasus,
    BatPony,
    Griffon,
    Dragon,
    Human,
}

impl Race {
    pub const ALL: [Race; 7] = [
        Race::EarthPony,
        Race::Unicorn,
        Race::Pegasus,
        Race::BatPony,
        Race::Griffon,
        Race::Dragon,
        Race::Human,
    ];
}

/// Static definition of a race: creation-time stat bonuses and free perks.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaceDefinition {
    pub race: Race,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stat_bonuses: BTreeMap<Attribute, i32>,
    /// Perk ids granted at rank 1 without spending points.
    #[cfg_attr(feature = "serde", serde(default))]
    pub starting_perks: Vec<String>,
}

impl RaceDefinition {
    pub fn new(race: Race, name: impl Into<String>) -> Self {
        Self {
            race,
            name: name.into(),
            description: String::new(),
            stat_bonuses: BTreeMap::new(),
            starting_perks: Vec::new(),
        }
    }

    pub fn with_bonus(mut self, attr: Attribute, delta: i32) -> Self {
        *self.stat_bonuses.entry(attr).or_insert(0) += delta;
        self
    }

    pub fn with_starting_perk(mut self, perk_id: impl Into<String>) -> Self {
        self.starting_perks.push(perk_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn race_names_round_trip_through_strings() {
        assert_eq!(Race::BatPony.to_string(), "bat_pony");
        assert_eq!(Race::from_str("earth_pony").ok(), Some(Race::EarthPony));
        assert_eq!(Race::from_str("GRIFFON").ok(), Some(Race::Griffon));
    }
}
