//! End-to-end rules scenarios driven through the public API.

use rules_core::{
    AttackDefinition, Attribute, Character, Combatant, ContentCatalog, EnemyTemplate, GameConfig,
    PcgRng, PointPool, Race, RandomSource, ResourceKind, RulesEngine, StatusEffect, StatusKind,
    UnlockDefinition, UnlockKind,
    combat::resolve_attack,
    env::CatalogOracle,
    npc::{Enemy, EnemyMove, MoveEntry, choose_move},
};

fn catalog() -> ContentCatalog {
    ContentCatalog::builder()
        .skill(UnlockDefinition::skill("hoof_strike", "Hoof Strike").with_max_rank(3))
        .skill(
            UnlockDefinition::skill("thunder_kick", "Thunder Kick")
                .with_prerequisite("hoof_strike")
                .with_stat_bonus(Attribute::Strength, 1),
        )
        .attack(
            AttackDefinition::new("buck", "Buck", 20)
                .with_accuracy(1.0)
                .with_crit(0.0, 1.5),
        )
        .attack(AttackDefinition::new("peck", "Peck", 4))
        .attack(AttackDefinition::new("screech", "Screech", 1))
        .enemy(
            EnemyTemplate::new("golem", "Stone Golem", 1)
                .with_health(100)
                .with_defense(5)
                .with_move("peck", 1, 0),
        )
        .enemy(
            EnemyTemplate::new("harpy", "Harpy", 1)
                .with_health(30)
                .with_move("screech", 1, 0)
                .with_move("peck", 99, 0),
        )
        .build()
        .expect("valid catalog")
}

#[test]
fn max_health_formula_then_damage_and_heal() {
    let catalog = catalog();
    let engine = RulesEngine::new(&catalog, GameConfig::default());
    let mut hero = engine.create_character("Scout", Race::Human);

    assert_eq!(hero.level(), 1);
    assert_eq!(hero.stats().total(Attribute::Constitution), 10);
    let strength = hero.stats().total(Attribute::Strength);
    let con = hero.stats().total(Attribute::Constitution);
    let max = 30 + strength * 2 + con * 3;
    assert_eq!(hero.maximums().health, max);

    hero.take_damage(40);
    hero.heal(10);
    let expected = ((max - 40).max(0) + 10).min(max);
    assert_eq!(hero.meter(ResourceKind::Health).current(), expected);
}

#[test]
fn flat_attack_against_defense() {
    let catalog = catalog();
    let engine = RulesEngine::new(&catalog, GameConfig::default());
    let hero = engine.create_character("Scout", Race::Human);
    let mut golem = engine.spawn_enemy("golem", 1).expect("golem");
    assert_eq!(golem.defense(), 5);

    let mut rng = PcgRng::seeded(11);
    for _ in 0..3 {
        let report = engine
            .resolve_attack(&hero, &mut golem, "buck", &mut rng)
            .expect("known attack");
        assert_eq!(report.nominal, 20);
        assert_eq!(report.mitigated, 5);
        assert_eq!(report.applied, 15);
    }
    assert_eq!(golem.health.current(), 55);
}

#[test]
fn heavy_weight_dominates_selection() {
    let catalog = catalog();
    let engine = RulesEngine::new(&catalog, GameConfig::default());
    let harpy = engine.spawn_enemy("harpy", 1).expect("harpy");
    let mut rng = PcgRng::seeded(2024);

    let heavy = (0..1000)
        .filter_map(|_| engine.choose_move(&harpy, &mut rng))
        .filter(|mv| mv.attack_id == "peck")
        .count();
    assert!((960..=1000).contains(&heavy), "heavy move chosen {heavy} times");
}

#[test]
fn prerequisite_gates_until_unlocked() {
    let catalog = catalog();
    let engine = RulesEngine::new(&catalog, GameConfig::default());
    let mut hero = engine.create_character("Scout", Race::Human);
    hero.grant_points(PointPool::Skill, 10);

    assert!(!engine.can_unlock(&hero, UnlockKind::Skill, "thunder_kick"));
    let before = hero.clone();
    assert!(engine.upgrade_skill(&mut hero, "thunder_kick").is_err());
    assert_eq!(hero, before);

    engine.upgrade_skill(&mut hero, "hoof_strike").expect("no gates");
    assert_eq!(hero.skills().rank("hoof_strike"), 1);
    assert!(engine.can_unlock(&hero, UnlockKind::Skill, "thunder_kick"));

    engine.upgrade_skill(&mut hero, "thunder_kick").expect("prerequisite met");
    assert_eq!(hero.stats().bonus(Attribute::Strength), 1);
}

#[test]
fn uniform_weights_are_roughly_even() {
    let moves: Vec<EnemyMove> = ["a", "b", "c"]
        .iter()
        .map(|id| EnemyMove::from_entry(&MoveEntry::new(*id, 1, 0)))
        .collect();
    let mut rng = PcgRng::seeded(77);
    let mut counts = [0usize; 3];
    let draws = 6000;
    for _ in 0..draws {
        let index = choose_move(&moves, &mut rng).expect("non-empty");
        counts[index] += 1;
    }
    for count in counts {
        let freq = count as f64 / draws as f64;
        assert!((freq - 1.0 / 3.0).abs() < 0.03, "frequency {freq}");
    }
}

/// Replays a fixed list of draws, then falls back to the minimum.
struct Script(Vec<i32>);

impl RandomSource for Script {
    fn uniform(&mut self, min: i32, _max: i32) -> i32 {
        if self.0.is_empty() { min } else { self.0.remove(0) }
    }
}

#[test]
fn blind_weak_attacker_against_shielded_target() {
    let catalog = catalog();
    let mut hero = Character::builder("Scout", Race::Human).build(&catalog);
    hero.effects_mut().add(StatusEffect::new(StatusKind::Weakness, 3, 0));
    hero.effects_mut().add(StatusEffect::new(StatusKind::Blind, 3, 0));

    let template = catalog.find_enemy("golem").expect("golem");
    let mut golem = Enemy::spawn(template, 1);
    golem.effects.add(StatusEffect::new(StatusKind::Shield, 2, 6));

    let attack = AttackDefinition::new("slam", "Slam", 20)
        .with_accuracy(0.9)
        .with_crit(0.5, 2.0);

    // Hit chance 0.45 → threshold 4500; 4501 misses.
    let miss = resolve_attack(&hero, &mut golem, &attack, &mut Script(vec![4501]));
    assert!(!miss.outcome.is_hit());
    assert_eq!(golem.health.current(), 100);

    // Hit, crit: 20 × 0.7 = 14, × 2 = 28; shield 6, defense 5 → 17.
    let hit = resolve_attack(&hero, &mut golem, &attack, &mut Script(vec![4500, 1]));
    assert_eq!(hit.nominal, 28);
    assert_eq!(hit.absorbed, 6);
    assert_eq!(hit.mitigated, 5);
    assert_eq!(hit.applied, 17);
    assert_eq!(golem.health.current(), 83);
    assert_eq!(golem.effects.shield_capacity(), 0);
}

#[test]
fn on_hit_effects_roll_after_the_hit() {
    let catalog = catalog();
    let hero = Character::builder("Scout", Race::Human).build(&catalog);
    let mut golem = Enemy::spawn(catalog.find_enemy("golem").expect("golem"), 1);
    let venom = AttackDefinition::new("venom", "Venom Fang", 6)
        .with_accuracy(1.0)
        .with_crit(0.0, 1.5)
        .with_on_hit(StatusKind::Poison, 0.5, 3, 2)
        .with_on_hit(StatusKind::Stun, 0.5, 1, 0);

    // hit, no crit, poison roll succeeds, stun roll fails
    let report = resolve_attack(&hero, &mut golem, &venom, &mut Script(vec![1, 1, 5000, 5001]));
    assert_eq!(report.applied, 1);
    assert_eq!(
        report.effects_applied,
        vec![StatusEffect::new(StatusKind::Poison, 3, 2)]
    );
    assert!(golem.effects.has(StatusKind::Poison));
    assert!(golem.can_act());

    // Poison ticks straight into health.
    let tick = golem.tick_effects();
    assert_eq!(tick.damage_taken, 2);
}
