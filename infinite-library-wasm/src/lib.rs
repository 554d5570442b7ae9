//! WASM bindings for infinite-library: powers the browser front end.

use wasm_bindgen::prelude::*;

use infinite_library::core::assembler::BookGenerator;
use infinite_library::core::config::LibraryConfig;
use infinite_library::core::route::{book_link, Route};
use infinite_library::core::seed::{random_seed, SpineStyle};
use infinite_library::core::viewer::{
    MemoryPreferences, PreferenceStore, Reader, Theme, ThemeController, THEME_KEY,
};
use infinite_library::schema::book::Book;
use infinite_library::schema::cover::CoverStyle;

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct CoverInfo {
    background: String,
    text_color: &'static str,
    border: String,
    font_class: &'static str,
    motif_class: Option<&'static str>,
    motif_html: String,
}

#[derive(serde::Serialize)]
struct BookInfo<'a> {
    seed: &'a str,
    title: &'a str,
    author: &'a str,
    document_title: String,
    byline: String,
    seed_info: String,
    chapter_count: usize,
    cover: CoverInfo,
}

#[derive(serde::Serialize)]
struct PageInfo<'a> {
    index: usize,
    title: &'a str,
    html: String,
    indicator: String,
    can_go_back: bool,
    can_go_forward: bool,
}

#[derive(serde::Serialize)]
struct SpineInfo {
    seed: String,
    title: String,
    link: String,
    background: String,
    height: String,
}

fn cover_info(style: &CoverStyle) -> CoverInfo {
    CoverInfo {
        background: style.background.css(),
        text_color: style.text_color.css(),
        border: style.border.css(),
        font_class: style.font.class_name(),
        motif_class: style.motif.class_name(),
        motif_html: style.motif.html(),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
}

// ---------------------------------------------------------------------------
// LibraryDemo: the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct LibraryDemo {
    generator: BookGenerator,
    book: Option<Book>,
    position: usize,
    theme: ThemeController<MemoryPreferences>,
}

#[wasm_bindgen]
impl LibraryDemo {
    /// Create a demo with the built-in tables. `config_ron` optionally
    /// overrides the layout, e.g. `(chapter_count: 8)`.
    #[wasm_bindgen(constructor)]
    pub fn new(config_ron: Option<String>) -> Result<LibraryDemo, JsError> {
        let config = match config_ron {
            Some(text) => LibraryConfig::parse_ron(&text)
                .map_err(|e| JsError::new(&format!("Config error: {e}")))?,
            None => LibraryConfig::default(),
        };
        let generator = BookGenerator::builder()
            .with_config(config)
            .build()
            .map_err(|e| JsError::new(&format!("Generator build error: {e}")))?;

        Ok(LibraryDemo {
            generator,
            book: None,
            position: 0,
            theme: ThemeController::new(MemoryPreferences::new()),
        })
    }

    /// Open the book named by a page query string (`?id=...`).
    /// Returns the book JSON, or `null` when the query routes to the front page.
    pub fn open_query(&mut self, query: &str) -> Result<Option<String>, JsError> {
        match Route::from_query(query) {
            Route::Book(seed) => self.open(&seed).map(Some),
            Route::Landing => Ok(None),
        }
    }

    /// Generate and open the book for `seed`, returning its metadata as JSON.
    pub fn open(&mut self, seed: &str) -> Result<String, JsError> {
        let book = self.generator.generate(seed);
        self.position = 0;
        let info = BookInfo {
            seed: &book.seed,
            title: &book.title,
            author: &book.author,
            document_title: book.document_title(&self.generator.config().site_name),
            byline: book.byline(),
            seed_info: book.seed_info(),
            chapter_count: book.chapter_count(),
            cover: cover_info(&self.generator.cover(seed)),
        };
        let json = to_json(&info)?;
        self.book = Some(book);
        Ok(json)
    }

    /// JSON for the current chapter page.
    pub fn page(&self) -> Result<String, JsError> {
        let book = self
            .book
            .as_ref()
            .ok_or_else(|| JsError::new("No book open"))?;
        let mut reader = Reader::new(book);
        reader.go_to(self.position);
        let view = reader
            .view()
            .ok_or_else(|| JsError::new("Book has no chapters"))?;
        to_json(&PageInfo {
            index: view.index,
            title: view.title,
            html: view.html,
            indicator: view.indicator,
            can_go_back: view.can_go_back,
            can_go_forward: view.can_go_forward,
        })
    }

    /// Advance one chapter. Returns false at the last chapter.
    pub fn next(&mut self) -> bool {
        self.step(|reader| reader.next())
    }

    /// Go back one chapter. Returns false at the first chapter.
    pub fn previous(&mut self) -> bool {
        self.step(|reader| reader.previous())
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        self.step(|reader| reader.go_to(index))
    }

    /// Restore a persisted theme value (`"light"` / `"dark"`).
    pub fn restore_theme(&mut self, stored: Option<String>) -> String {
        let mut store = MemoryPreferences::new();
        if let Some(value) = stored {
            store.set(THEME_KEY, &value);
        }
        self.theme = ThemeController::new(store);
        self.theme.current().to_string()
    }

    /// Toggle light/dark; returns the value to persist.
    pub fn toggle_theme(&mut self) -> String {
        self.theme.toggle().to_string()
    }

    pub fn theme(&self) -> String {
        self.theme.current().to_string()
    }

    /// Icon for the theme toggle button.
    pub fn theme_icon(&self) -> String {
        self.theme.current().toggle_icon().to_string()
    }

    pub fn is_dark(&self) -> bool {
        self.theme.current() == Theme::Dark
    }

    /// A fresh seed for the "surprise me" button.
    pub fn random_seed(&self) -> String {
        random_seed(&mut rand::thread_rng(), self.generator.config().seed_length)
    }

    /// JSON array of `count` random books for the front-page shelf.
    pub fn shelf(&self, count: usize) -> Result<String, JsError> {
        let mut rng = rand::thread_rng();
        let text = self.generator.text();
        let spines: Vec<SpineInfo> = (0..count)
            .map(|_| {
                let seed = random_seed(&mut rng, self.generator.config().seed_length);
                let spine = SpineStyle::random(&mut rng);
                SpineInfo {
                    title: text.title(&seed),
                    link: book_link(&seed),
                    background: spine.background_css(),
                    height: spine.height_css(),
                    seed,
                }
            })
            .collect();
        to_json(&spines)
    }

    pub fn link(seed: &str) -> String {
        book_link(seed)
    }
}

// Private helpers
impl LibraryDemo {
    fn step(&mut self, action: impl FnOnce(&mut Reader<'_>) -> bool) -> bool {
        let Some(book) = self.book.as_ref() else {
            return false;
        };
        let mut reader = Reader::new(book);
        reader.go_to(self.position);
        let moved = action(&mut reader);
        self.position = reader.current();
        moved
    }
}
