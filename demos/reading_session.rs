/// Reading Session example: a visitor browses the library front page,
/// follows a book link, reads a few chapters and switches to the dark theme.
///
/// Run with: cargo run --example reading_session

use infinite_library::core::assembler::BookGenerator;
use infinite_library::core::route::{book_link, Route};
use infinite_library::core::seed::{random_seed, SpineStyle};
use infinite_library::core::viewer::{
    cover_caption_html, ChapterView, MemoryPreferences, PreferenceStore, Reader, RenderSink,
    ThemeController, THEME_KEY,
};
use infinite_library::schema::cover::CoverStyle;

/// Collects rendered pages as a minimal HTML document.
#[derive(Default)]
struct HtmlPage {
    body: String,
}

impl RenderSink for HtmlPage {
    fn show_chapter(&mut self, view: &ChapterView<'_>) {
        self.body.push_str(&format!(
            "<h2>{}</h2>{}<nav data-prev=\"{}\" data-next=\"{}\">{}</nav>\n",
            view.title_html(), view.html, view.can_go_back, view.can_go_forward, view.indicator
        ));
    }
}

fn describe_cover(style: &CoverStyle) -> String {
    format!(
        "background: {}; color: {}; border: {}; class: {}{}",
        style.background.css(),
        style.text_color.css(),
        style.border.css(),
        style.font.class_name(),
        style
            .motif
            .class_name()
            .map(|m| format!(" {m}"))
            .unwrap_or_default()
    )
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("infinite_library=debug")
        .init();

    let generator = BookGenerator::builder()
        .build()
        .expect("Failed to build generator");
    let config = generator.config();

    // --- Front page: a shelf of random spines ---
    let mut rng = rand::thread_rng();
    println!("=== {} ===\n", config.site_name);
    let mut shelf = Vec::new();
    for _ in 0..4 {
        let seed = random_seed(&mut rng, config.seed_length);
        let spine = SpineStyle::random(&mut rng);
        let title = generator.text().title(&seed);
        println!(
            "  [{} | {}] {}  ->  {}",
            spine.background_css(),
            spine.height_css(),
            title,
            book_link(&seed)
        );
        shelf.push(seed);
    }

    // --- Follow the second link ---
    let link = book_link(&shelf[1]);
    let query = link.split_once('?').map(|(_, q)| q).unwrap_or("");
    let seed = match Route::from_query(query) {
        Route::Book(seed) => seed,
        Route::Landing => unreachable!("a generated link always carries a seed"),
    };

    let book = generator.generate(&seed);
    println!("\n{}", book.document_title(&config.site_name));
    println!("{}", cover_caption_html(&book));
    println!("{}", describe_cover(&generator.cover(&seed)));
    println!("{}\n", book.seed_info());

    // --- Read the first three chapters, then try to go back past the start ---
    let mut reader = Reader::new(&book);
    let mut page = HtmlPage::default();
    reader.render(&mut page);
    for _ in 0..2 {
        reader.next();
        reader.render(&mut page);
    }
    reader.go_to(0);
    assert!(!reader.previous(), "already on the first chapter");
    println!("{}", page.body);

    // --- Theme preference survives a reload ---
    let mut theme = ThemeController::new(MemoryPreferences::new());
    theme.toggle();
    let store = theme.into_store();
    println!("Stored theme: {:?}", store.get(THEME_KEY));
    let reloaded = ThemeController::new(store);
    println!(
        "After reload: {} (toggle button shows {})",
        reloaded.current(),
        reloaded.current().toggle_icon()
    );

    // --- Chapters past the end still exist for the same seed ---
    let premise = generator.premise(&seed);
    let bonus = generator.chapter(&seed, 9, &premise.story());
    println!("\nBonus: {} ({} paragraphs)", bonus.title, bonus.content.len());
}
