//! Skirmish configuration from environment variables.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use rules_core::Race;

/// Everything needed to set up and run one encounter.
#[derive(Clone, Debug, PartialEq)]
pub struct SkirmishConfig {
    /// Directory holding `config.toml` and the RON catalogs.
    pub data_dir: PathBuf,
    pub seed: u64,
    pub name: String,
    pub race: Race,
    pub level: u32,
    /// Enemy template ids (or names) to face, in turn order.
    pub enemies: Vec<String>,
    /// Attack the player uses every turn. `None` picks the first attack the race may use.
    pub attack: Option<String>,
    pub max_rounds: u32,
}

impl Default for SkirmishConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            seed: 0x5eed,
            name: "Wanderer".to_owned(),
            race: Race::EarthPony,
            level: 1,
            enemies: vec!["parasprite_swarm".to_owned()],
            attack: None,
            max_rounds: 50,
        }
    }
}

impl SkirmishConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_DATA_DIR` - Content directory (default: `data`)
    /// - `SKIRMISH_SEED` - RNG seed (default: 24301)
    /// - `SKIRMISH_NAME` - Character name (default: `Wanderer`)
    /// - `SKIRMISH_RACE` - Race, e.g. `unicorn` or `bat_pony` (default: `earth_pony`)
    /// - `SKIRMISH_LEVEL` - Starting level (default: 1)
    /// - `SKIRMISH_ENEMIES` - Comma-separated enemy ids (default: `parasprite_swarm`)
    /// - `SKIRMISH_ATTACK` - Player attack id (default: first attack the race may use)
    /// - `SKIRMISH_MAX_ROUNDS` - Round limit (default: 50)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("SKIRMISH_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(seed) = read_var(&lookup, "SKIRMISH_SEED") {
            config.seed = seed;
        }
        if let Some(name) = lookup("SKIRMISH_NAME").filter(|n| !n.trim().is_empty()) {
            config.name = name.trim().to_owned();
        }
        if let Some(race) = read_var(&lookup, "SKIRMISH_RACE") {
            config.race = race;
        }
        if let Some(level) = read_var::<u32>(&lookup, "SKIRMISH_LEVEL") {
            config.level = level.max(1);
        }
        if let Some(enemies) = lookup("SKIRMISH_ENEMIES") {
            let ids: Vec<String> = enemies
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_owned)
                .collect();
            if !ids.is_empty() {
                config.enemies = ids;
            }
        }
        if let Some(attack) = lookup("SKIRMISH_ATTACK").filter(|a| !a.trim().is_empty()) {
            config.attack = Some(attack.trim().to_owned());
        }
        if let Some(rounds) = read_var::<u32>(&lookup, "SKIRMISH_MAX_ROUNDS") {
            config.max_rounds = rounds.max(1);
        }

        config
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> SkirmishConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SkirmishConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(config(&[]), SkirmishConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = config(&[
            ("SKIRMISH_DATA_DIR", "/srv/content"),
            ("SKIRMISH_SEED", "7"),
            ("SKIRMISH_NAME", " Luna "),
            ("SKIRMISH_RACE", "Bat_Pony"),
            ("SKIRMISH_LEVEL", "4"),
            ("SKIRMISH_ENEMIES", "timberwolf, manticore,,"),
            ("SKIRMISH_ATTACK", "wing_gust"),
            ("SKIRMISH_MAX_ROUNDS", "12"),
        ]);
        assert_eq!(config.data_dir, PathBuf::from("/srv/content"));
        assert_eq!(config.seed, 7);
        assert_eq!(config.name, "Luna");
        assert_eq!(config.race, Race::BatPony);
        assert_eq!(config.level, 4);
        assert_eq!(config.enemies, vec!["timberwolf", "manticore"]);
        assert_eq!(config.attack.as_deref(), Some("wing_gust"));
        assert_eq!(config.max_rounds, 12);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = config(&[
            ("SKIRMISH_SEED", "lots"),
            ("SKIRMISH_RACE", "zebra"),
            ("SKIRMISH_ENEMIES", " , "),
            ("SKIRMISH_MAX_ROUNDS", "0"),
        ]);
        assert_eq!(config.seed, 0x5eed);
        assert_eq!(config.race, Race::EarthPony);
        assert_eq!(config.enemies, vec!["parasprite_swarm"]);
        assert_eq!(config.max_rounds, 1);
    }
}
