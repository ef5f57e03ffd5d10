//! Editor configuration.
//!
//! Stored as JSON. Every field has a default, so a config file only needs
//! the keys it wants to change:
//!
//! ```json
//! { "width": 1600, "height": 900, "docs": { "cooldown_secs": 2.0 } }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use tracing::warn;

use pfx::EditorSettings;

use crate::error::EditorError;

/// Top-level editor configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    /// Window title.
    pub title: String,
    /// Initial window width in logical pixels.
    pub width: u32,
    /// Initial window height in logical pixels.
    pub height: u32,
    /// Simulation ticks per second.
    pub target_fps: u32,
    /// Lifetime of each spawned particle, in ticks.
    pub particle_lifetime: f32,
    /// Hard cap on live particles.
    pub max_particles: usize,
    /// Fixed spawner seed for reproducible sessions.
    pub seed: Option<u64>,
    pub docs: DocsConfig,
}

/// Cooldown used when the configured one is unusable.
const DEFAULT_COOLDOWN_SECS: f32 = 5.0;

/// Where the documentation lives and how often a lookup may repeat.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DocsConfig {
    pub base_url: String,
    /// Minimum seconds between two lookups of the same query.
    pub cooldown_secs: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            title: "PFX Editor".into(),
            width: 1100,
            height: 700,
            target_fps: 60,
            particle_lifetime: pfx::spawn::DEFAULT_LIFETIME,
            max_particles: 50_000,
            seed: None,
            docs: DocsConfig::default(),
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".into(),
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
        }
    }
}

impl DocsConfig {
    /// Repeat-lookup cooldown. Negative values mean no cooldown; values too
    /// large for a `Duration` fall back to the default.
    pub fn cooldown(&self) -> Duration {
        match Duration::try_from_secs_f32(self.cooldown_secs.max(0.0)) {
            Ok(cooldown) => cooldown,
            Err(_) => {
                warn!(
                    cooldown_secs = self.cooldown_secs,
                    "unusable docs cooldown, using default"
                );
                Duration::from_secs_f32(DEFAULT_COOLDOWN_SECS)
            }
        }
    }
}

impl EditorConfig {
    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), EditorError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EditorError> {
        let json = fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        Ok(config)
    }

    /// Settings for the editor core at the configured window size.
    pub fn editor_settings(&self) -> EditorSettings {
        EditorSettings {
            width: self.width,
            height: self.height,
            particle_lifetime: self.particle_lifetime.max(1.0),
            max_particles: self.max_particles,
            seed: self.seed,
        }
    }
}
