/// Content-table and layout-config integration tests, driven by RON fixtures.

use infinite_library::core::assembler::{BookGenerator, LibraryError};
use infinite_library::core::config::{ConfigError, CountRange, LibraryConfig};
use infinite_library::core::grammar::GrammarError;
use infinite_library::core::tables::{ContentTables, TableError, TableSource};
use std::path::Path;

const TABLES: &str = "tests/fixtures/custom_tables.ron";
const CONFIG: &str = "tests/fixtures/custom_config.ron";

const FORCED_SENTENCES: [&str; 5] = [
    "Tired clerk walked towards the quiet Lantern.",
    "The a small town, under rain was under rain, filled with quiet shadows and quiet echoes.",
    "Tired clerk pondered their mission: to balance the ledger.",
    "At dusk, a quiet a parcel waits from the depths of a small town, under rain.",
    "Later, the path ahead seemed even more quiet.",
];

fn custom_generator() -> BookGenerator {
    BookGenerator::builder()
        .tables_path(TABLES)
        .config_path(CONFIG)
        .build()
        .unwrap()
}

#[test]
fn custom_tables_load() {
    let tables = ContentTables::load_from_ron(Path::new(TABLES)).unwrap();
    assert_eq!(tables.version, 7);
    assert_eq!(tables.title_nouns, vec!["Lantern".to_string()]);
    assert_eq!(tables.chapter_titles.group_count(), 2);
}

#[test]
fn custom_config_loads() {
    let config = LibraryConfig::load_from_ron(Path::new(CONFIG)).unwrap();
    assert_eq!(config.chapter_count, 3);
    assert_eq!(config.paragraphs_per_chapter, CountRange::new(2, 2));
    assert_eq!(config.sentences_per_paragraph, CountRange::new(1, 1));
    assert_eq!(config.site_name, "Test Shelf");
    // Unlisted fields keep their defaults.
    assert_eq!(config.seed_length, 12);
    assert_eq!(config.log_level, "info");
}

#[test]
fn forced_vocabulary_book() {
    let generator = custom_generator();
    let book = generator.generate("anything at all");

    assert_eq!(book.author, "Ada Quill");
    assert_eq!(book.protagonist, "tired clerk");
    assert_eq!(book.main_setting, "a small town, under rain");
    assert!(
        [
            "The Brass Lantern",
            "Secrets of the Brass Lantern",
            "Lantern of Brass Light",
            "Chronicles of the Brass Lantern",
            "A Whisper of the Brass Lantern",
        ]
        .contains(&book.title.as_str()),
        "{}",
        book.title
    );

    let titles: Vec<&str> = book.chapters.iter().map(|c| c.title.as_str()).collect();
    // Two title groups: the third chapter wraps back to group 0.
    assert_eq!(
        titles,
        vec![
            "Chapter 1: Part One",
            "Chapter 2: Interlude",
            "Chapter 3: Part One",
        ]
    );

    for chapter in &book.chapters {
        assert_eq!(chapter.content.len(), 2);
        for paragraph in &chapter.content {
            assert!(
                FORCED_SENTENCES.contains(&paragraph.as_str()),
                "unexpected paragraph: {paragraph}"
            );
        }
    }
    assert_eq!(
        book.document_title(&generator.config().site_name),
        format!("{} - Test Shelf", book.title)
    );
}

#[test]
fn forced_vocabulary_covers_every_sentence_shape() {
    let generator = custom_generator();
    let text = generator.text();
    let mut seen = std::collections::BTreeSet::new();
    for i in 0..200 {
        seen.insert(text.sentence("shapes", &format!("s{i}"), Some("tired clerk"), Some("a small town, under rain")));
    }
    let expected: std::collections::BTreeSet<String> =
        FORCED_SENTENCES.iter().map(|s| s.to_string()).collect();
    assert_eq!(seen, expected);
}

#[test]
fn builtin_and_custom_tables_share_title_draws() {
    // Title structure is drawn before any vocabulary, so the same seed picks
    // the same structure whatever the tables contain.
    let builtin = BookGenerator::builder().build().unwrap();
    let custom = custom_generator();
    assert_eq!(builtin.generate("TestSeed123").title, "Secrets of the Whispering Echo");
    assert_eq!(custom.generate("TestSeed123").title, "Secrets of the Brass Lantern");
}

#[test]
fn source_lists_vocabularies_in_file_order() {
    let source = TableSource::parse_ron(&std::fs::read_to_string(TABLES).unwrap()).unwrap();
    let names: Vec<&str> = source.vocabularies().iter().map(|(name, _)| *name).collect();
    assert_eq!(names.first(), Some(&"title_adjectives"));
    assert_eq!(names.last(), Some(&"descriptive_adjectives"));
    assert_eq!(names.len(), 15);
}

#[test]
fn unknown_slot_rejected_at_load() {
    let input = std::fs::read_to_string(TABLES)
        .unwrap()
        .replace("Part {NUMBER}", "Part {ROMAN}");
    match ContentTables::parse_ron(&input) {
        Err(TableError::Grammar(GrammarError::UnknownSlot { template, slot })) => {
            assert_eq!(template, "Part {ROMAN}");
            assert_eq!(slot, "ROMAN");
        }
        other => panic!("expected UnknownSlot, got {other:?}"),
    }
}

#[test]
fn missing_group_zero_rejected() {
    let input = std::fs::read_to_string(TABLES)
        .unwrap()
        .replace("0: [\"Part {NUMBER}\"],", "2: [\"Part {NUMBER}\"],");
    assert!(matches!(
        ContentTables::parse_ron(&input),
        Err(TableError::Grammar(GrammarError::MissingDefaultGroup))
    ));
}

#[test]
fn empty_slot_table_rejected() {
    let input = std::fs::read_to_string(TABLES)
        .unwrap()
        .replace("\"NUMBER\": [\"One\"]", "\"NUMBER\": []");
    assert!(matches!(
        ContentTables::parse_ron(&input),
        Err(TableError::Grammar(GrammarError::EmptySlot(_)))
    ));
}

#[test]
fn builder_reports_config_errors() {
    let result = BookGenerator::builder()
        .config_path("tests/fixtures/missing_config.ron")
        .build();
    assert!(matches!(
        result,
        Err(LibraryError::Config(ConfigError::Io(_)))
    ));
}

#[test]
fn explicit_config_overrides_path() {
    let config = LibraryConfig {
        chapter_count: 1,
        ..LibraryConfig::default()
    };
    let generator = BookGenerator::builder()
        .config_path(CONFIG)
        .with_config(config)
        .tables_path(TABLES)
        .build()
        .unwrap();
    assert_eq!(generator.generate("x").chapters.len(), 1);
}
