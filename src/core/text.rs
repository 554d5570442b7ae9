/// Text generators: titles, names, sentences, paragraphs and chapters.
///
/// Every generator re-seeds its own `Lcg` from `seed + facet label` before
/// drawing anything, so outputs depend only on the seed, the facet and the
/// content tables.

use crate::core::config::LibraryConfig;
use crate::core::prng::Lcg;
use crate::core::tables::ContentTables;
use crate::schema::book::Chapter;
use crate::schema::facet::Facet;

/// Shapes a book title can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleStructure {
    /// "The {adj} {noun}"
    The,
    /// "Secrets of the {adj} {noun}"
    SecretsOf,
    /// "{noun} of {adj} Light"
    OfLight,
    /// "Chronicles of the {adj} {noun}"
    ChroniclesOf,
    /// "A Whisper of the {adj} {noun}"
    WhisperOf,
}

impl TitleStructure {
    /// Draw order; part of the output contract.
    pub const ALL: [TitleStructure; 5] = [
        Self::The,
        Self::SecretsOf,
        Self::OfLight,
        Self::ChroniclesOf,
        Self::WhisperOf,
    ];

    pub fn format(&self, adjective: &str, noun: &str) -> String {
        match self {
            Self::The => format!("The {adjective} {noun}"),
            Self::SecretsOf => format!("Secrets of the {adjective} {noun}"),
            Self::OfLight => format!("{noun} of {adjective} Light"),
            Self::ChroniclesOf => format!("Chronicles of the {adjective} {noun}"),
            Self::WhisperOf => format!("A Whisper of the {adjective} {noun}"),
        }
    }
}

/// Sentence shapes used for chapter prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentenceStructure {
    /// Protagonist moves towards something.
    Advance,
    /// Description of the setting.
    Atmosphere,
    /// Protagonist reflects on their motivation.
    Mission,
    /// Something stirs in the setting.
    Omen,
    /// Connector-led transition.
    Transition,
}

impl SentenceStructure {
    pub const ALL: [SentenceStructure; 5] = [
        Self::Advance,
        Self::Atmosphere,
        Self::Mission,
        Self::Omen,
        Self::Transition,
    ];

    /// Render with words drawn from `rng` in reading order.
    fn render(
        &self,
        tables: &ContentTables,
        rng: &mut Lcg,
        protagonist: &str,
        setting: &str,
    ) -> String {
        match self {
            Self::Advance => {
                let verb = rng.pick(&tables.action_verbs);
                let adjective = rng.pick(&tables.descriptive_adjectives);
                let noun = rng.pick(&tables.title_nouns);
                format!(
                    "{} {verb} towards the {adjective} {noun}.",
                    capitalize_first(protagonist)
                )
            }
            Self::Atmosphere => {
                let descriptor = rng.pick(&tables.setting_descriptors);
                let shadows = rng.pick(&tables.descriptive_adjectives);
                let echoes = rng.pick(&tables.descriptive_adjectives);
                format!(
                    "The {setting} was {descriptor}, filled with {shadows} shadows and {echoes} echoes."
                )
            }
            Self::Mission => {
                let motivation = rng.pick(&tables.character_motivations);
                format!(
                    "{} pondered their mission: {motivation}.",
                    capitalize_first(protagonist)
                )
            }
            Self::Omen => {
                let starter = rng.pick(&tables.sentence_starters);
                let adjective = rng.pick(&tables.descriptive_adjectives);
                let object = rng.pick(&tables.plot_objects);
                let verb = rng.pick(&tables.plot_verbs);
                format!("{starter}, a {adjective} {object} {verb} from the depths of {setting}.")
            }
            Self::Transition => {
                let connector = rng.pick(&tables.connectors);
                let adjective = rng.pick(&tables.descriptive_adjectives);
                format!(
                    "{}, the path ahead seemed even more {adjective}.",
                    capitalize_first(connector)
                )
            }
        }
    }
}

/// Per-book context threaded through chapter prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryContext<'a> {
    pub protagonist: &'a str,
    pub setting: &'a str,
}

/// Pure text generators over a set of content tables and a layout.
#[derive(Debug, Clone, Copy)]
pub struct TextGenerator<'a> {
    tables: &'a ContentTables,
    config: &'a LibraryConfig,
}

impl<'a> TextGenerator<'a> {
    pub fn new(tables: &'a ContentTables, config: &'a LibraryConfig) -> Self {
        Self { tables, config }
    }

    pub fn title(&self, seed: &str) -> String {
        let mut rng = Lcg::for_facet(seed, &Facet::Title);
        let structure = rng.pick(&TitleStructure::ALL);
        let adjective = rng.pick(&self.tables.title_adjectives);
        let noun = rng.pick(&self.tables.title_nouns);
        structure.format(adjective, noun)
    }

    pub fn author(&self, seed: &str) -> String {
        let mut rng = Lcg::for_facet(seed, &Facet::Author);
        let first = rng.pick(&self.tables.author_first_names);
        let last = rng.pick(&self.tables.author_last_names);
        format!("{first} {last}")
    }

    /// Adjective + noun, e.g. "reluctant librarian".
    pub fn protagonist(&self, seed: &str) -> String {
        let mut rng = Lcg::for_facet(seed, &Facet::MainProtagonist);
        let adjective = rng.pick(&self.tables.character_adjectives);
        let noun = rng.pick(&self.tables.character_nouns);
        format!("{adjective} {noun}")
    }

    /// Setting type + descriptor, e.g. "an ancient forest, shrouded in mist".
    pub fn main_setting(&self, seed: &str) -> String {
        let mut rng = Lcg::for_facet(seed, &Facet::MainSetting);
        let kind = rng.pick(&self.tables.setting_types);
        let descriptor = rng.pick(&self.tables.setting_descriptors);
        format!("{kind}, {descriptor}")
    }

    /// One sentence for the slot identified by `label`.
    ///
    /// A missing or empty protagonist/setting is replaced by a fresh pick
    /// from the character-noun/setting-type tables.
    pub fn sentence(
        &self,
        seed: &str,
        label: &str,
        protagonist: Option<&str>,
        setting: Option<&str>,
    ) -> String {
        self.sentence_for(seed, &Facet::Sentence(label.to_string()), protagonist, setting)
    }

    fn sentence_for(
        &self,
        seed: &str,
        facet: &Facet,
        protagonist: Option<&str>,
        setting: Option<&str>,
    ) -> String {
        let mut rng = Lcg::for_facet(seed, facet);
        let structure = *rng.pick(&SentenceStructure::ALL);

        let protagonist = match protagonist.filter(|p| !p.is_empty()) {
            Some(p) => p,
            None => rng.pick(&self.tables.character_nouns).as_str(),
        };
        let setting = match setting.filter(|s| !s.is_empty()) {
            Some(s) => s,
            None => rng.pick(&self.tables.setting_types).as_str(),
        };

        structure.render(self.tables, &mut rng, protagonist, setting)
    }

    /// Space-joined sentences for one paragraph of one chapter.
    pub fn paragraph(&self, seed: &str, chapter: usize, paragraph: usize, story: &StoryContext<'_>) -> String {
        let mut rng = Lcg::for_facet(seed, &Facet::Paragraph { chapter, paragraph });
        let count = self.config.sentences_per_paragraph.draw(&mut rng) as usize;

        (0..count)
            .map(|sentence| {
                let facet = Facet::paragraph_sentence(chapter, paragraph, sentence);
                self.sentence_for(seed, &facet, Some(story.protagonist), Some(story.setting))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// "Chapter {n}: {filled template}".
    pub fn chapter_title(&self, seed: &str, chapter: usize) -> String {
        let mut rng = Lcg::for_facet(seed, &Facet::ChapterTitle(chapter));
        let title = self.tables.chapter_titles.render(chapter, &mut rng);
        format!("Chapter {}: {title}", chapter + 1)
    }

    pub fn chapter_content(&self, seed: &str, chapter: usize, story: &StoryContext<'_>) -> Vec<String> {
        let mut rng = Lcg::for_facet(seed, &Facet::ChapterContent(chapter));
        let count = self.config.paragraphs_per_chapter.draw(&mut rng) as usize;
        (0..count)
            .map(|paragraph| self.paragraph(seed, chapter, paragraph, story))
            .collect()
    }

    pub fn chapter(&self, seed: &str, chapter: usize, story: &StoryContext<'_>) -> Chapter {
        Chapter {
            title: self.chapter_title(seed, chapter),
            content: self.chapter_content(seed, chapter, story),
        }
    }
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
