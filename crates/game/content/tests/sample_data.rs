//! The shipped `data/` directory loads, validates and plays.

use std::path::PathBuf;

use rules_content::ContentFactory;
use rules_core::{
    Attribute, CatalogOracle, EncounterStatus, EquipmentSlot, PcgRng, Race, ResourceKind,
    RulesEngine, UnlockKind,
};

fn factory() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data"))
}

#[test]
fn sample_catalog_is_valid() {
    let (config, catalog) = factory().load_all().unwrap();
    assert_eq!(config.progression.max_level, 50);

    let summary = catalog.summary();
    assert_eq!(summary.races, Race::ALL.len());
    assert!(summary.skills > 0);
    assert!(summary.perks > 0);
    assert!(summary.enemies > 0);
    assert!(summary.equipment > 0);

    for race in Race::ALL {
        let def = catalog.race(race).unwrap();
        for perk in &def.starting_perks {
            assert!(catalog.perk(perk).is_some(), "{race}: missing {perk}");
        }
    }
}

#[test]
fn races_start_with_their_perks() {
    let (config, catalog) = factory().load_all().unwrap();
    let engine = RulesEngine::new(&catalog, config);

    let unicorn = engine.create_character("Sparkle", Race::Unicorn);
    assert_eq!(unicorn.stats().total(Attribute::Intelligence), 13);
    assert!(unicorn.perks().is_unlocked("unicorn_magic"));
    // 30 + 13·3 + 11 + 15 from the perk
    assert_eq!(unicorn.meter(ResourceKind::Magic).maximum(), 95);

    let earth = engine.create_character("Mac", Race::EarthPony);
    // 30 + 13·2 + 12·3 + 10 from the perk
    assert_eq!(earth.meter(ResourceKind::Health).maximum(), 102);
    assert!(
        engine
            .available_unlocks(&earth, UnlockKind::Skill)
            .is_empty()
    );
}

#[test]
fn earth_pony_levels_buys_and_gears_up() {
    let (config, catalog) = factory().load_all().unwrap();
    let engine = RulesEngine::new(&catalog, config);
    let mut mac = engine.create_character("Mac", Race::EarthPony);

    let report = engine.add_experience(&mut mac, 1000);
    assert_eq!(report.new_level, 2);
    engine.upgrade_skill(&mut mac, "earth_connection").unwrap();
    engine.upgrade_skill(&mut mac, "apple_bucking").unwrap();
    assert!(engine.upgrade_skill(&mut mac, "advanced_magic").is_err());
    engine.acquire_perk(&mut mac, "tough").unwrap();

    assert!(!engine.can_equip(&mac, "focus_gem"));
    engine.equip(&mut mac, "horseshoes").unwrap();
    engine.equip(&mut mac, "leather_cap").unwrap();
    assert_eq!(mac.loadout().item_id(EquipmentSlot::Feet), Some("horseshoes"));
    assert_eq!(mac.loadout().defense(), 2);
}

#[test]
fn skirmish_against_a_parasprite_swarm() {
    let (config, catalog) = factory().load_all().unwrap();
    let engine = RulesEngine::new(&catalog, config);
    let hero = engine.create_character("Mac", Race::EarthPony);
    let mut fight = engine.start_encounter(hero, &["parasprite_swarm"]);
    assert_eq!(fight.enemies().len(), 1);

    let mut rng = PcgRng::seeded(42);
    for _ in 0..100 {
        if fight
            .play_round(engine.catalog(), "basic_attack", &mut rng)
            .is_none()
        {
            break;
        }
    }

    assert_eq!(fight.status(), EncounterStatus::Victory);
    assert_eq!(fight.experience_reward(), Some(20));
}
