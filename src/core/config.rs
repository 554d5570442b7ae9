/// Book layout configuration: chapter, paragraph and sentence counts,
/// seed token length and presentation strings.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::prng::Lcg;

/// Largest accepted `max` for paragraph and sentence counts.
pub const MAX_COUNT: u32 = 1000;
/// Largest accepted `chapter_count`.
pub const MAX_CHAPTERS: usize = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Inclusive count bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, n: usize) -> bool {
        (self.min as usize..=self.max as usize).contains(&n)
    }

    /// Draw a count with `range(min, max + 1)`.
    pub fn draw(&self, rng: &mut Lcg) -> u32 {
        rng.range(self.min, self.max + 1)
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.min == 0 {
            return Err(ConfigError::Invalid(format!("{name}.min must be at least 1")));
        }
        if self.min > self.max {
            return Err(ConfigError::Invalid(format!(
                "{name}.min ({}) exceeds {name}.max ({})",
                self.min, self.max
            )));
        }
        if self.max > MAX_COUNT {
            return Err(ConfigError::Invalid(format!(
                "{name}.max ({}) exceeds the limit of {MAX_COUNT}",
                self.max
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    pub chapter_count: usize,
    pub paragraphs_per_chapter: CountRange,
    pub sentences_per_paragraph: CountRange,
    /// Length of tokens produced by the "surprise me" seed generator.
    pub seed_length: usize,
    pub site_name: String,
    /// Fallback log filter for the tools when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            chapter_count: 5,
            paragraphs_per_chapter: CountRange::new(5, 10),
            sentences_per_paragraph: CountRange::new(3, 7),
            seed_length: 12,
            site_name: "Infinite Library".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl LibraryConfig {
    pub fn load_from_ron(path: &Path) -> Result<LibraryConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::parse_ron(&contents)?;
        tracing::debug!(path = %path.display(), "library config loaded");
        Ok(config)
    }

    /// Parse a config; missing fields keep their defaults.
    pub fn parse_ron(input: &str) -> Result<LibraryConfig, ConfigError> {
        let config: LibraryConfig = ron::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chapter_count == 0 {
            return Err(ConfigError::Invalid(
                "chapter_count must be at least 1".to_string(),
            ));
        }
        if self.chapter_count > MAX_CHAPTERS {
            return Err(ConfigError::Invalid(format!(
                "chapter_count ({}) exceeds the limit of {MAX_CHAPTERS}",
                self.chapter_count
            )));
        }
        self.paragraphs_per_chapter
            .validate("paragraphs_per_chapter")?;
        self.sentences_per_paragraph
            .validate("sentences_per_paragraph")?;
        Ok(())
    }
}
