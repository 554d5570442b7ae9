/// Book assembly: one seed in, one complete `Book` out.
///
/// Wires the text generators, cover style and layout configuration
/// together behind a builder.

use std::path::{Path, PathBuf};
use std::thread;
use thiserror::Error;

use crate::core::config::{ConfigError, LibraryConfig};
use crate::core::cover::cover_style;
use crate::core::tables::{ContentTables, TableError};
use crate::core::text::{StoryContext, TextGenerator};
use crate::schema::book::{Book, Chapter};
use crate::schema::cover::CoverStyle;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("table error: {0}")]
    Tables(#[from] TableError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Owned protagonist and setting phrases for one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Premise {
    pub protagonist: String,
    pub main_setting: String,
}

impl Premise {
    pub fn story(&self) -> StoryContext<'_> {
        StoryContext {
            protagonist: &self.protagonist,
            setting: &self.main_setting,
        }
    }
}

/// The top-level book generator. Built via `BookGenerator::builder()`.
#[derive(Debug, Clone)]
pub struct BookGenerator {
    tables: ContentTables,
    config: LibraryConfig,
}

/// Builder for constructing a `BookGenerator`.
#[derive(Debug, Default)]
pub struct BookGeneratorBuilder {
    config_path: Option<PathBuf>,
    tables_path: Option<PathBuf>,
    /// Directly provided config (for embedding without files).
    config: Option<LibraryConfig>,
    /// Directly provided tables (for embedding without files).
    tables: Option<ContentTables>,
}

impl BookGenerator {
    pub fn builder() -> BookGeneratorBuilder {
        BookGeneratorBuilder::default()
    }

    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    pub fn tables(&self) -> &ContentTables {
        &self.tables
    }

    pub fn text(&self) -> TextGenerator<'_> {
        TextGenerator::new(&self.tables, &self.config)
    }

    pub fn premise(&self, seed: &str) -> Premise {
        let text = self.text();
        Premise {
            protagonist: text.protagonist(seed),
            main_setting: text.main_setting(seed),
        }
    }

    /// A single chapter; any index is accepted.
    pub fn chapter(&self, seed: &str, index: usize, story: &StoryContext<'_>) -> Chapter {
        self.text().chapter(seed, index, story)
    }

    pub fn cover(&self, seed: &str) -> CoverStyle {
        cover_style(seed)
    }

    /// Generate the complete book for `seed`.
    pub fn generate(&self, seed: &str) -> Book {
        let premise = self.premise(seed);
        let story = premise.story();
        let chapters = (0..self.config.chapter_count)
            .map(|index| self.chapter(seed, index, &story))
            .collect();
        self.finish(seed, premise, chapters)
    }

    /// Same output as `generate`, with chapters split into contiguous runs
    /// across at most `available_parallelism` worker threads. Each chapter
    /// derives its own PRNG streams, so the split does not affect output.
    pub fn generate_parallel(&self, seed: &str) -> Book {
        let premise = self.premise(seed);
        let story = premise.story();
        let story = &story;
        let count = self.config.chapter_count;
        let workers = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .clamp(1, count.max(1));
        let per_worker = count.div_ceil(workers).max(1);
        tracing::trace!(seed, workers, per_worker, "generating chapters in parallel");

        let chapters = thread::scope(|scope| {
            let handles: Vec<_> = (0..count)
                .step_by(per_worker)
                .map(|start| {
                    let end = (start + per_worker).min(count);
                    scope.spawn(move || {
                        (start..end)
                            .map(|index| self.chapter(seed, index, story))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            let mut chapters = Vec::with_capacity(count);
            for handle in handles {
                match handle.join() {
                    Ok(run) => chapters.extend(run),
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
            chapters
        });
        self.finish(seed, premise, chapters)
    }

    fn finish(&self, seed: &str, premise: Premise, chapters: Vec<Chapter>) -> Book {
        let text = self.text();
        let book = Book {
            seed: seed.to_string(),
            title: text.title(seed),
            author: text.author(seed),
            protagonist: premise.protagonist,
            main_setting: premise.main_setting,
            chapters,
        };
        tracing::debug!(
            seed,
            title = %book.title,
            chapters = book.chapters.len(),
            "book assembled"
        );
        book
    }
}

impl BookGeneratorBuilder {
    pub fn config_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn tables_path(mut self, path: impl AsRef<Path>) -> Self {
        self.tables_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Provide config directly; takes precedence over `config_path`.
    pub fn with_config(mut self, config: LibraryConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Provide tables directly; takes precedence over `tables_path`.
    pub fn with_tables(mut self, tables: ContentTables) -> Self {
        self.tables = Some(tables);
        self
    }

    pub fn build(self) -> Result<BookGenerator, LibraryError> {
        let config = match (self.config, self.config_path) {
            (Some(config), _) => {
                config.validate()?;
                config
            }
            (None, Some(path)) => LibraryConfig::load_from_ron(&path)?,
            (None, None) => LibraryConfig::default(),
        };

        let tables = match (self.tables, self.tables_path) {
            (Some(tables), _) => tables,
            (None, Some(path)) => ContentTables::load_from_ron(&path)?,
            (None, None) => ContentTables::builtin()?,
        };

        Ok(BookGenerator { tables, config })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CountRange;

    fn generator() -> BookGenerator {
        BookGenerator::builder().build().unwrap()
    }

    #[test]
    fn golden_book() {
        let book = generator().generate("TestSeed123");
        assert_eq!(book.seed, "TestSeed123");
        assert_eq!(book.title, "Secrets of the Whispering Echo");
        assert_eq!(book.author, "Orion Starfield");
        assert_eq!(book.protagonist, "reluctant librarian");
        assert_eq!(
            book.main_setting,
            "a deep-space station, rich with undiscovered flora"
        );
        let titles: Vec<&str> = book.chapters.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Chapter 1: Genesis of Order",
                "Chapter 2: Journey to the Archive",
                "Chapter 3: The Heart of the Relic",
                "Chapter 4: The Hidden Gambit",
                "Chapter 5: Beyond the Horizon",
            ]
        );
        let paragraphs: Vec<usize> = book.chapters.iter().map(|c| c.content.len()).collect();
        assert_eq!(paragraphs, vec![8, 10, 6, 8, 5]);
    }

    #[test]
    fn parallel_matches_sequential() {
        let generator = generator();
        for seed in ["TestSeed123", "", "AlphaBeta123"] {
            assert_eq!(generator.generate(seed), generator.generate_parallel(seed));
        }
    }

    #[test]
    fn parallel_splits_long_books_in_order() {
        let config = LibraryConfig {
            chapter_count: 67,
            paragraphs_per_chapter: CountRange::new(1, 2),
            sentences_per_paragraph: CountRange::new(1, 2),
            ..LibraryConfig::default()
        };
        let generator = BookGenerator::builder().with_config(config).build().unwrap();
        let parallel = generator.generate_parallel("Long Shelf");
        assert_eq!(parallel.chapters.len(), 67);
        assert_eq!(parallel, generator.generate("Long Shelf"));
        assert!(parallel.chapters[66].title.starts_with("Chapter 67: "));
    }

    #[test]
    fn lone_chapter_matches_book_chapter() {
        let generator = generator();
        let book = generator.generate("Infinite");
        let premise = generator.premise("Infinite");
        let chapter = generator.chapter("Infinite", 3, &premise.story());
        assert_eq!(&chapter, &book.chapters[3]);
    }

    #[test]
    fn chapters_beyond_the_book_are_available() {
        let generator = generator();
        let premise = generator.premise("Infinite");
        let chapter = generator.chapter("Infinite", 42, &premise.story());
        assert!(chapter.title.starts_with("Chapter 43: "));
        assert!(!chapter.content.is_empty());
    }

    #[test]
    fn builder_rejects_invalid_config() {
        let config = LibraryConfig {
            chapter_count: 0,
            ..LibraryConfig::default()
        };
        assert!(matches!(
            BookGenerator::builder().with_config(config).build(),
            Err(LibraryError::Config(ConfigError::Invalid(_)))
        ));
    }

    #[test]
    fn builder_missing_tables_file() {
        let result = BookGenerator::builder()
            .tables_path("does/not/exist.ron")
            .build();
        assert!(matches!(result, Err(LibraryError::Tables(TableError::Io(_)))));
    }

    #[test]
    fn layout_changes_leave_other_facets_alone() {
        let base = generator().generate("TestSeed123");
        let config = LibraryConfig {
            chapter_count: 7,
            paragraphs_per_chapter: CountRange::new(1, 2),
            sentences_per_paragraph: CountRange::new(1, 1),
            ..LibraryConfig::default()
        };
        let other = BookGenerator::builder()
            .with_config(config)
            .build()
            .unwrap()
            .generate("TestSeed123");
        assert_eq!(other.title, base.title);
        assert_eq!(other.author, base.author);
        assert_eq!(other.protagonist, base.protagonist);
        assert_eq!(other.main_setting, base.main_setting);
        assert_eq!(other.chapters.len(), 7);
        for (a, b) in base.chapters.iter().zip(&other.chapters) {
            assert_eq!(a.title, b.title);
        }
    }
}
