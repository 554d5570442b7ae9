/// Table Linter: validates a content-tables file and reports quality issues.
///
/// Usage: table_linter <tables.ron> [--chapters <n>]

use infinite_library::core::grammar::Template;
use infinite_library::core::tables::{ContentTables, TableSource};
use rustc_hash::FxHashSet;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: table_linter <tables.ron> [--chapters <n>]");
        process::exit(0);
    }

    let path = &args[1];
    let mut chapters = None;

    let mut i = 2;
    while i < args.len() {
        if args[i] == "--chapters" && i + 1 < args.len() {
            i += 1;
            chapters = args[i].parse::<usize>().ok();
        }
        i += 1;
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("ERROR: Failed to read '{}': {}", path, e);
            process::exit(1);
        }
    };

    let source = match TableSource::parse_ron(&contents) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    };

    println!(
        "Loaded tables version {} ({} vocabularies, {} title groups)",
        source.version,
        source.vocabularies().len(),
        source.chapter_title_templates.len()
    );

    let (errors, warnings) = lint_tables(&source, chapters);

    println!("\n=== Table Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn lint_tables(source: &TableSource, chapters: Option<usize>) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Hard failures are exactly what the generator would refuse to load.
    if let Err(e) = ContentTables::from_source(source.clone()) {
        errors.push(e.to_string());
    }

    for (name, entries) in source.vocabularies() {
        if entries.len() == 1 {
            warnings.push(format!("Table '{}' has a single entry", name));
        }
        for duplicate in duplicates(entries) {
            warnings.push(format!("Table '{}' lists '{}' more than once", name, duplicate));
        }
        if entries.iter().any(|entry| entry.trim() != entry || entry.is_empty()) {
            warnings.push(format!("Table '{}' has blank or padded entries", name));
        }
    }

    let mut used_slots: FxHashSet<String> = FxHashSet::default();
    for (group, templates) in &source.chapter_title_templates {
        for duplicate in duplicates(templates) {
            warnings.push(format!(
                "Title group {} lists '{}' more than once",
                group, duplicate
            ));
        }
        for text in templates {
            let Ok(template) = Template::parse(text) else {
                // Already reported through `from_source`.
                continue;
            };
            let slots: Vec<&str> = template.slots().collect();
            if slots.is_empty() {
                warnings.push(format!(
                    "Title template '{}' in group {} has no placeholders",
                    text, group
                ));
            }
            used_slots.extend(slots.into_iter().map(str::to_string));
        }
    }

    for (name, candidates) in &source.chapter_title_slots {
        if !used_slots.contains(name) {
            warnings.push(format!("Slot table '{}' is never referenced", name));
        }
        for duplicate in duplicates(candidates) {
            warnings.push(format!("Slot table '{}' lists '{}' more than once", name, duplicate));
        }
    }

    if let Some(chapters) = chapters {
        let groups = source.chapter_title_templates.len();
        if groups > chapters {
            warnings.push(format!(
                "{} title groups but books have {} chapters; groups {}.. are never used",
                groups, chapters, chapters
            ));
        } else if groups > 0 && chapters % groups != 0 {
            warnings.push(format!(
                "{} chapters do not divide evenly into {} title groups",
                chapters, groups
            ));
        }
    }

    (errors, warnings)
}

fn duplicates(entries: &[String]) -> Vec<&str> {
    let mut seen = FxHashSet::default();
    let mut reported = FxHashSet::default();
    entries
        .iter()
        .filter(|entry| !seen.insert(entry.as_str()) && reported.insert(entry.as_str()))
        .map(String::as_str)
        .collect()
}
