/// Preview: interactive reading shell for browsing generated books.
///
/// Usage: library_preview [--seed <text>] [--config <path>] [--tables <path>]
///
/// Commands:
///   open <seed...>   open the book for a seed (spaces allowed)
///   random           open a book for a fresh random seed
///   next / prev      page through chapters
///   chapter <n>      jump to chapter n (1-based)
///   cover            show the cover style
///   theme            toggle light/dark
///   ron              dump the current book as RON
///   link             print the shareable link for the current seed
///   help             list commands
///   quit             exit

use infinite_library::core::assembler::BookGenerator;
use infinite_library::core::config::LibraryConfig;
use infinite_library::core::route::book_link;
use infinite_library::core::seed::random_seed;
use infinite_library::core::viewer::{
    ChapterView, MemoryPreferences, Reader, RenderSink, ThemeController,
};
use infinite_library::schema::book::Book;
use infinite_library::schema::cover::Border;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Plain-text sink for chapter pages.
struct StdoutSink;

impl RenderSink for StdoutSink {
    fn show_chapter(&mut self, view: &ChapterView<'_>) {
        println!("\n{}", view.title);
        println!("{}\n", "-".repeat(view.title.chars().count()));
        for paragraph in view.paragraphs {
            println!("{}\n", paragraph);
        }
        let back = if view.can_go_back { "prev" } else { "    " };
        let forward = if view.can_go_forward { "next" } else { "    " };
        println!("[{back}]  {}  [{forward}]", view.indicator);
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut seed = None;
    let mut config_path = None;
    let mut tables_path = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return;
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = Some(args[i].clone());
            }
            "--config" if i + 1 < args.len() => {
                i += 1;
                config_path = Some(PathBuf::from(&args[i]));
            }
            "--tables" if i + 1 < args.len() => {
                i += 1;
                tables_path = Some(PathBuf::from(&args[i]));
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(ref path) => match LibraryConfig::load_from_ron(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("ERROR: Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => LibraryConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut builder = BookGenerator::builder().with_config(config);
    if let Some(ref path) = tables_path {
        builder = builder.tables_path(path);
    }
    let generator = match builder.build() {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    let site_name = generator.config().site_name.clone();
    let seed_length = generator.config().seed_length;
    println!("{}", site_name);
    println!("Type 'help' for commands.\n");

    let mut theme = ThemeController::new(MemoryPreferences::new());
    let mut book: Option<Book> = None;
    let mut position = 0;
    let mut sink = StdoutSink;

    if let Some(seed) = seed {
        let opened = generator.generate(&seed);
        show_cover(&opened, &generator, &site_name);
        show_page(&opened, position, &mut sink);
        book = Some(opened);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("library> ");
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).is_err() || line.is_empty() {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd.to_lowercase(), rest.trim()),
            None => (line.to_lowercase(), ""),
        };

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye.");
                break;
            }
            "help" | "h" | "?" => print_help(),
            "open" => {
                if rest.is_empty() {
                    println!("Usage: open <seed>");
                    continue;
                }
                let opened = generator.generate(rest);
                position = 0;
                show_cover(&opened, &generator, &site_name);
                show_page(&opened, position, &mut sink);
                book = Some(opened);
            }
            "random" => {
                let seed = random_seed(&mut rand::thread_rng(), seed_length);
                println!("Seed: {}", seed);
                let opened = generator.generate(&seed);
                position = 0;
                show_cover(&opened, &generator, &site_name);
                show_page(&opened, position, &mut sink);
                book = Some(opened);
            }
            "next" | "n" | "prev" | "p" | "chapter" => {
                let Some(ref current) = book else {
                    println!("No book open. Use 'open <seed>' or 'random' first.");
                    continue;
                };
                let mut reader = Reader::new(current);
                reader.go_to(position);
                let moved = match cmd.as_str() {
                    "next" | "n" => reader.next(),
                    "prev" | "p" => reader.previous(),
                    _ => match rest.parse::<usize>() {
                        Ok(n) if n >= 1 => reader.go_to(n - 1),
                        _ => {
                            println!("Usage: chapter <1..{}>", current.chapter_count());
                            continue;
                        }
                    },
                };
                if !moved {
                    println!("No such chapter.");
                    continue;
                }
                position = reader.current();
                reader.render(&mut sink);
            }
            "cover" => match book {
                Some(ref current) => show_cover(current, &generator, &site_name),
                None => println!("No book open."),
            },
            "theme" => {
                let now = theme.toggle();
                println!("Theme: {} (toggle shows {})", now, now.toggle_icon());
            }
            "ron" => match book {
                Some(ref current) => {
                    match ron::ser::to_string_pretty(current, ron::ser::PrettyConfig::default()) {
                        Ok(text) => println!("{}", text),
                        Err(e) => println!("ERROR: {}", e),
                    }
                }
                None => println!("No book open."),
            },
            "link" => match book {
                Some(ref current) => println!("{}", book_link(&current.seed)),
                None => println!("No book open."),
            },
            other => {
                println!("Unknown command: '{}'. Type 'help' for commands.", other);
            }
        }
    }
}

fn show_cover(book: &Book, generator: &BookGenerator, site_name: &str) {
    let style = generator.cover(&book.seed);
    println!("\n=== {} ===", book.document_title(site_name));
    println!("{}", book.byline());
    println!("{}", book.seed_info());
    println!("  background: {}", style.background.css());
    println!("  text:       {}", style.text_color.css());
    println!("  font:       {}", style.font.class_name());
    println!(
        "  motif:      {}",
        style.motif.class_name().unwrap_or("none")
    );
    match style.border {
        Border::Transparent => println!("  border:     none"),
        Border::Solid(_) => println!("  border:     {}", style.border.css()),
    }
}

fn show_page(book: &Book, position: usize, sink: &mut impl RenderSink) {
    let mut reader = Reader::new(book);
    reader.go_to(position);
    reader.render(sink);
}

fn print_usage() {
    println!("Usage: library_preview [--seed <text>] [--config <path>] [--tables <path>]");
    println!();
    println!("Options:");
    println!("  --seed <text>     Open this book on start");
    println!("  --config <path>   Layout config (RON)");
    println!("  --tables <path>   Content tables (RON), defaults to the built-in set");
}

fn print_help() {
    println!("Commands:");
    println!("  open <seed>   Open the book for a seed (spaces allowed)");
    println!("  random        Open a book for a fresh random seed");
    println!("  next | prev   Page through chapters");
    println!("  chapter <n>   Jump to chapter n");
    println!("  cover         Show the cover style");
    println!("  theme         Toggle light/dark theme");
    println!("  ron           Dump the book as RON");
    println!("  link          Print the shareable link");
    println!("  help          Show this help");
    println!("  quit          Exit");
}
