//! Skirmish runner binary.
//!
//! Loads content, builds one character and plays a seeded encounter headlessly. The
//! turn-by-turn log goes to stderr through `tracing`; the final summary goes to stdout.
//!
//! # Examples
//!
//! ```bash
//! SKIRMISH_RACE=unicorn SKIRMISH_ENEMIES=timberwolf cargo run -p rules-client
//!
//! # Full turn detail
//! RUST_LOG=rules_core=debug SKIRMISH_SEED=7 cargo run -p rules-client
//! ```

use anyhow::Result;
use rules_client::{Skirmish, SkirmishConfig};
use rules_core::ResourceKind;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SkirmishConfig::from_env();
    tracing::debug!(?config, "configuration loaded");

    let outcome = Skirmish::builder().config(config).build()?.run()?;

    let player = &outcome.player;
    let health = player.meter(ResourceKind::Health);
    println!(
        "{} the {} after {} round(s): {}",
        player.name(),
        player.race(),
        outcome.rounds,
        outcome.status
    );
    println!("health {}/{}", health.current(), health.maximum());
    let stats: Vec<String> = player
        .stats()
        .iter_totals()
        .map(|(attr, total)| {
            format!(
                "{} {} ({:+})",
                attr.abbreviation(),
                total,
                player.stats().modifier(attr)
            )
        })
        .collect();
    println!("{}", stats.join("  "));
    if let Some(report) = &outcome.level_up {
        println!(
            "level {} ({} xp toward next), {} bits",
            report.new_level, report.experience, outcome.bits
        );
    }
    Ok(())
}
