/// Reading session: chapter paging, theme preference and the injected
/// collaborators (preference store, render sink) a front end supplies.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

use crate::schema::book::{escape_html, Book};

/// Storage key of the persisted theme.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label for the toggle button: the theme it switches to.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

/// Key-value preference storage owned by the front end.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory preference store.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: FxHashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Current theme, persisted through a `PreferenceStore` on every change.
#[derive(Debug)]
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Restore the stored theme; missing or unknown values mean light.
    pub fn new(store: S) -> Self {
        let current = match store.get(THEME_KEY) {
            Some(stored) => stored.parse().unwrap_or_else(|err: String| {
                tracing::warn!(%err, "falling back to light theme");
                Theme::Light
            }),
            None => Theme::Light,
        };
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn apply(&mut self, theme: Theme) {
        self.current = theme;
        self.store.set(THEME_KEY, theme.as_str());
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.apply(next);
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

/// Everything a front end needs to draw one chapter page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterView<'a> {
    pub index: usize,
    pub total: usize,
    pub title: &'a str,
    pub paragraphs: &'a [String],
    /// Paragraphs as escaped `<p>` elements.
    pub html: String,
    /// "Chapter 2 of 5"
    pub indicator: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

impl ChapterView<'_> {
    /// Chapter title escaped for HTML text content.
    pub fn title_html(&self) -> String {
        escape_html(self.title)
    }
}

/// Receives rendered chapter pages.
pub trait RenderSink {
    fn show_chapter(&mut self, view: &ChapterView<'_>);
}

/// Cursor over a book's chapters. Paging past either end is a no-op.
#[derive(Debug, Clone)]
pub struct Reader<'b> {
    book: &'b Book,
    current: usize,
}

impl<'b> Reader<'b> {
    pub fn new(book: &'b Book) -> Self {
        Self { book, current: 0 }
    }

    pub fn book(&self) -> &'b Book {
        self.book
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.book.chapter_count()
    }

    /// Jump to `index`; returns false (and stays put) when out of range.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.book.chapter_count() {
            self.current = index;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) -> bool {
        !self.is_last() && self.go_to(self.current + 1)
    }

    pub fn previous(&mut self) -> bool {
        !self.is_first() && self.go_to(self.current - 1)
    }

    pub fn view(&self) -> Option<ChapterView<'b>> {
        let chapter = self.book.chapter(self.current)?;
        let total = self.book.chapter_count();
        Some(ChapterView {
            index: self.current,
            total,
            title: &chapter.title,
            paragraphs: &chapter.content,
            html: chapter.to_html(),
            indicator: format!("Chapter {} of {}", self.current + 1, total),
            can_go_back: !self.is_first(),
            can_go_forward: !self.is_last(),
        })
    }

    /// Push the current page to `sink`; books without chapters render nothing.
    pub fn render(&self, sink: &mut impl RenderSink) {
        if let Some(view) = self.view() {
            sink.show_chapter(&view);
        }
    }
}

/// Cover text block: escaped title and byline, for sinks that write HTML.
pub fn cover_caption_html(book: &Book) -> String {
    format!(
        "<h1>{}</h1><p>{}</p>",
        escape_html(&book.title),
        escape_html(&book.byline())
    )
}
