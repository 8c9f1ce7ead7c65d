//! Skirmish builder.

use anyhow::{Context, Result};
use rules_content::ContentFactory;
use rules_core::{ContentCatalog, GameConfig};

use crate::{Skirmish, SkirmishConfig};

/// Builder for constructing a [`Skirmish`].
///
/// Content can be injected directly; otherwise it is loaded from the configured data
/// directory when [`build`](Self::build) runs.
#[derive(Default)]
pub struct SkirmishBuilder {
    config: Option<SkirmishConfig>,
    content: Option<(GameConfig, ContentCatalog)>,
}

impl SkirmishBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the skirmish configuration (required).
    pub fn config(mut self, config: SkirmishConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use already-loaded rules and catalog instead of reading the data directory.
    pub fn content(mut self, rules: GameConfig, catalog: ContentCatalog) -> Self {
        self.content = Some((rules, catalog));
        self
    }

    /// Build the Skirmish.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is not set
    /// - Content has to be loaded and fails to load or validate
    pub fn build(self) -> Result<Skirmish> {
        let config = self
            .config
            .context("Skirmish configuration is required. Call .config() before .build()")?;

        let (rules, catalog) = match self.content {
            Some(content) => content,
            None => ContentFactory::new(&config.data_dir)
                .load_all()
                .with_context(|| format!("Failed to load content from {}", config.data_dir.display()))?,
        };

        let summary = catalog.summary();
        tracing::info!(
            races = summary.races,
            skills = summary.skills,
            perks = summary.perks,
            attacks = summary.attacks,
            enemies = summary.enemies,
            equipment = summary.equipment,
            "content ready"
        );

        Ok(Skirmish {
            config,
            rules,
            catalog,
        })
    }
}
