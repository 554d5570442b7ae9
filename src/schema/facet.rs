use std::fmt;

/// Cover attributes that each draw from their own PRNG stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverFacet {
    BackgroundType,
    Hue1,
    Saturation1,
    Lightness1,
    Hue2,
    Saturation2,
    Lightness2,
    GradientAngle,
    FontStyle,
    Motif,
    BorderType,
    BorderColorOffset,
}

impl CoverFacet {
    pub fn label(&self) -> &'static str {
        match self {
            Self::BackgroundType => "cover_bg_type",
            Self::Hue1 => "cover_hue1",
            Self::Saturation1 => "cover_sat1",
            Self::Lightness1 => "cover_light1",
            Self::Hue2 => "cover_hue2",
            Self::Saturation2 => "cover_sat2",
            Self::Lightness2 => "cover_light2",
            Self::GradientAngle => "cover_gradient_angle",
            Self::FontStyle => "cover_font_style",
            Self::Motif => "cover_motif",
            Self::BorderType => "cover_border_type",
            Self::BorderColorOffset => "cover_border_color_offset",
        }
    }
}

/// One independently seeded generation concern.
///
/// The PRNG key for a facet is the root seed followed by the facet's
/// label. Labels are part of the output contract: renaming one changes
/// every book.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Facet {
    Title,
    Author,
    MainProtagonist,
    MainSetting,
    Cover(CoverFacet),
    ChapterTitle(usize),
    ChapterContent(usize),
    Paragraph { chapter: usize, paragraph: usize },
    /// Sentence structure stream; the label identifies the sentence slot.
    Sentence(String),
}

impl Facet {
    /// Sentence facet for the `sentence`-th sentence of a paragraph.
    pub fn paragraph_sentence(chapter: usize, paragraph: usize, sentence: usize) -> Facet {
        Facet::Sentence(format!("ch{chapter}p{paragraph}s{sentence}"))
    }

    /// Full PRNG key for this facet under `seed`.
    pub fn key(&self, seed: &str) -> String {
        format!("{seed}{self}")
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Author => f.write_str("author"),
            Self::MainProtagonist => f.write_str("main_protagonist"),
            Self::MainSetting => f.write_str("main_setting"),
            Self::Cover(cover) => f.write_str(cover.label()),
            Self::ChapterTitle(chapter) => write!(f, "ch{chapter}title"),
            Self::ChapterContent(chapter) => write!(f, "ch{chapter}content"),
            Self::Paragraph { chapter, paragraph } => write!(f, "ch{chapter}p{paragraph}"),
            Self::Sentence(label) => write!(f, "{label}sentence_struct"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_append_label_to_seed() {
        assert_eq!(Facet::Title.key("abc"), "abctitle");
        assert_eq!(Facet::MainSetting.key(""), "main_setting");
        assert_eq!(
            Facet::Cover(CoverFacet::BorderColorOffset).key("s"),
            "scover_border_color_offset"
        );
    }

    #[test]
    fn chapter_labels() {
        assert_eq!(Facet::ChapterTitle(3).to_string(), "ch3title");
        assert_eq!(Facet::ChapterContent(0).to_string(), "ch0content");
        assert_eq!(
            Facet::Paragraph {
                chapter: 2,
                paragraph: 11
            }
            .to_string(),
            "ch2p11"
        );
    }

    #[test]
    fn sentence_label_nests_paragraph_position() {
        let facet = Facet::paragraph_sentence(1, 4, 2);
        assert_eq!(facet.key("seed"), "seedch1p4s2sentence_struct");
    }
}
