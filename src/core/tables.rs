/// Content tables: the versioned vocabularies and chapter-title grammar
/// that every generator draws from.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::core::grammar::{ChapterTitleGrammar, GrammarError};

/// The tables shipped with the library.
const BUILTIN_TABLES: &str = include_str!("../../library_data/tables.ron");

#[derive(Debug, Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("table '{0}' is empty")]
    EmptyTable(&'static str),
    #[error("chapter title grammar: {0}")]
    Grammar(#[from] GrammarError),
}

/// Tables exactly as written in RON, before validation. Chapter titles are
/// still plain template strings here; `ContentTables::from_source` compiles
/// them into a `ChapterTitleGrammar`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename = "Tables")]
pub struct TableSource {
    pub version: u32,
    pub title_adjectives: Vec<String>,
    pub title_nouns: Vec<String>,
    pub author_first_names: Vec<String>,
    pub author_last_names: Vec<String>,
    pub character_nouns: Vec<String>,
    pub character_adjectives: Vec<String>,
    pub character_motivations: Vec<String>,
    pub setting_types: Vec<String>,
    pub setting_descriptors: Vec<String>,
    pub plot_verbs: Vec<String>,
    pub plot_objects: Vec<String>,
    pub sentence_starters: Vec<String>,
    pub connectors: Vec<String>,
    pub action_verbs: Vec<String>,
    pub descriptive_adjectives: Vec<String>,
    pub chapter_title_templates: BTreeMap<usize, Vec<String>>,
    pub chapter_title_slots: BTreeMap<String, Vec<String>>,
}

impl TableSource {
    pub fn parse_ron(input: &str) -> Result<TableSource, TableError> {
        Ok(ron::from_str(input)?)
    }

    /// Every flat vocabulary with its field name, in file order.
    pub fn vocabularies(&self) -> [(&'static str, &[String]); 15] {
        [
            ("title_adjectives", &self.title_adjectives),
            ("title_nouns", &self.title_nouns),
            ("author_first_names", &self.author_first_names),
            ("author_last_names", &self.author_last_names),
            ("character_nouns", &self.character_nouns),
            ("character_adjectives", &self.character_adjectives),
            ("character_motivations", &self.character_motivations),
            ("setting_types", &self.setting_types),
            ("setting_descriptors", &self.setting_descriptors),
            ("plot_verbs", &self.plot_verbs),
            ("plot_objects", &self.plot_objects),
            ("sentence_starters", &self.sentence_starters),
            ("connectors", &self.connectors),
            ("action_verbs", &self.action_verbs),
            ("descriptive_adjectives", &self.descriptive_adjectives),
        ]
    }
}

/// Read-only vocabularies. Every list is guaranteed non-empty and every
/// chapter-title placeholder resolvable.
#[derive(Debug, Clone)]
pub struct ContentTables {
    pub version: u32,
    pub title_adjectives: Vec<String>,
    pub title_nouns: Vec<String>,
    pub author_first_names: Vec<String>,
    pub author_last_names: Vec<String>,
    pub character_nouns: Vec<String>,
    pub character_adjectives: Vec<String>,
    pub character_motivations: Vec<String>,
    pub setting_types: Vec<String>,
    pub setting_descriptors: Vec<String>,
    pub plot_verbs: Vec<String>,
    pub plot_objects: Vec<String>,
    pub sentence_starters: Vec<String>,
    pub connectors: Vec<String>,
    pub action_verbs: Vec<String>,
    pub descriptive_adjectives: Vec<String>,
    pub chapter_titles: ChapterTitleGrammar,
}

impl ContentTables {
    /// The built-in tables (version 1).
    pub fn builtin() -> Result<ContentTables, TableError> {
        Self::parse_ron(BUILTIN_TABLES)
    }

    /// Load tables from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<ContentTables, TableError> {
        let contents = std::fs::read_to_string(path)?;
        let tables = Self::parse_ron(&contents)?;
        tracing::debug!(path = %path.display(), version = tables.version, "content tables loaded");
        Ok(tables)
    }

    /// Parse and validate tables from a RON string.
    pub fn parse_ron(input: &str) -> Result<ContentTables, TableError> {
        Self::from_source(TableSource::parse_ron(input)?)
    }

    /// Validate raw tables: no empty vocabulary, and a chapter-title grammar
    /// whose every placeholder resolves.
    pub fn from_source(raw: TableSource) -> Result<ContentTables, TableError> {
        if let Some(&(name, _)) = raw.vocabularies().iter().find(|(_, table)| table.is_empty()) {
            return Err(TableError::EmptyTable(name));
        }
        if raw.chapter_title_templates.is_empty() {
            return Err(TableError::EmptyTable("chapter_title_templates"));
        }

        let chapter_titles =
            ChapterTitleGrammar::new(&raw.chapter_title_templates, &raw.chapter_title_slots)?;

        Ok(ContentTables {
            version: raw.version,
            title_adjectives: raw.title_adjectives,
            title_nouns: raw.title_nouns,
            author_first_names: raw.author_first_names,
            author_last_names: raw.author_last_names,
            character_nouns: raw.character_nouns,
            character_adjectives: raw.character_adjectives,
            character_motivations: raw.character_motivations,
            setting_types: raw.setting_types,
            setting_descriptors: raw.setting_descriptors,
            plot_verbs: raw.plot_verbs,
            plot_objects: raw.plot_objects,
            sentence_starters: raw.sentence_starters,
            connectors: raw.connectors,
            action_verbs: raw.action_verbs,
            descriptive_adjectives: raw.descriptive_adjectives,
            chapter_titles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_load() {
        let tables = ContentTables::builtin().unwrap();
        assert_eq!(tables.version, 1);
        assert_eq!(tables.title_adjectives.len(), 14);
        assert_eq!(tables.title_nouns.len(), 17);
        assert_eq!(tables.author_first_names.len(), 12);
        assert_eq!(tables.author_last_names.len(), 10);
        assert_eq!(tables.chapter_titles.group_count(), 5);
    }

    #[test]
    fn builtin_table_order_is_stable() {
        let tables = ContentTables::builtin().unwrap();
        assert_eq!(tables.title_adjectives[0], "Crimson");
        assert_eq!(tables.title_nouns[16], "Garden");
        assert_eq!(tables.setting_types[4], "a deep-space station");
        assert_eq!(tables.descriptive_adjectives[7], "intricate");
    }

    #[test]
    fn empty_vocabulary_rejected() {
        let input = BUILTIN_TABLES.replace(
            r#"connectors: ["however", "therefore", "meanwhile", "as a result", "furthermore", "in contrast", "suddenly", "unexpectedly"],"#,
            "connectors: [],",
        );
        assert!(matches!(
            ContentTables::parse_ron(&input),
            Err(TableError::EmptyTable("connectors"))
        ));
    }

    #[test]
    fn unresolvable_placeholder_rejected() {
        let input = BUILTIN_TABLES.replace("Genesis of {CONCEPT}", "Genesis of {MISSING}");
        assert!(matches!(
            ContentTables::parse_ron(&input),
            Err(TableError::Grammar(GrammarError::UnknownSlot { .. }))
        ));
    }

    #[test]
    fn malformed_ron_rejected() {
        assert!(matches!(
            ContentTables::parse_ron("Tables(version: 1"),
            Err(TableError::Ron(_))
        ));
    }
}
