use serde::{Deserialize, Serialize};

/// One chapter: a numbered title and its paragraphs in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    pub content: Vec<String>,
}

impl Chapter {
    /// Paragraphs as `<p>` elements, text escaped.
    pub fn to_html(&self) -> String {
        self.content
            .iter()
            .map(|paragraph| format!("<p>{}</p>", escape_html(paragraph)))
            .collect()
    }

    pub fn sentence_count(&self) -> usize {
        self.content
            .iter()
            .map(|paragraph| paragraph.matches(". ").count() + 1)
            .sum()
    }
}

/// A complete generated book. Equal seeds always produce equal books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub seed: String,
    pub title: String,
    pub author: String,
    /// Adjective + noun, e.g. "weary captain".
    pub protagonist: String,
    /// Setting type + descriptor, e.g. "an ancient forest, shrouded in mist".
    pub main_setting: String,
    pub chapters: Vec<Chapter>,
}

impl Book {
    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Page title shown by a browser tab, e.g. "The Lost Codex - Infinite Library".
    pub fn document_title(&self, site_name: &str) -> String {
        format!("{} - {}", self.title, site_name)
    }

    pub fn byline(&self) -> String {
        format!("by {}", self.author)
    }

    pub fn seed_info(&self) -> String {
        format!("Book Seed: {}", self.seed)
    }
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book {
            seed: "Nova".to_string(),
            title: "The Lost Codex".to_string(),
            author: "Elara Vance".to_string(),
            protagonist: "weary captain".to_string(),
            main_setting: "an ancient forest, shrouded in mist".to_string(),
            chapters: vec![Chapter {
                title: "Chapter 1: The Call of Hope".to_string(),
                content: vec![
                    "Weary captain raced towards the vast Moon. Suddenly, the path ahead seemed even more eerie.".to_string(),
                    "Meanwhile, the path ahead seemed even more serene.".to_string(),
                ],
            }],
        }
    }

    #[test]
    fn chapter_html_wraps_paragraphs() {
        let book = sample_book();
        let html = book.chapters[0].to_html();
        assert!(html.starts_with("<p>Weary captain"));
        assert_eq!(html.matches("<p>").count(), 2);
        assert!(html.ends_with("serene.</p>"));
    }

    #[test]
    fn html_escaping() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn sentence_count_counts_terminators() {
        assert_eq!(sample_book().chapters[0].sentence_count(), 3);
    }

    #[test]
    fn metadata_strings() {
        let book = sample_book();
        assert_eq!(
            book.document_title("Infinite Library"),
            "The Lost Codex - Infinite Library"
        );
        assert_eq!(book.byline(), "by Elara Vance");
        assert_eq!(book.seed_info(), "Book Seed: Nova");
        assert!(book.chapter(0).is_some());
        assert!(book.chapter(1).is_none());
    }
}
