use serde::{Deserialize, Serialize};
use std::fmt;

/// An HSL colour as the cover palette expresses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// Degrees, 0..360.
    pub hue: u32,
    /// Percent.
    pub saturation: u32,
    /// Percent.
    pub lightness: u32,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Cover background fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Background {
    Solid(Hsl),
    LinearGradient { angle: u32, from: Hsl, to: Hsl },
    RadialGradient { from: Hsl, to: Hsl },
}

impl Background {
    /// The colour every other cover attribute is derived from.
    pub fn base(&self) -> Hsl {
        match self {
            Self::Solid(base) => *base,
            Self::LinearGradient { from, .. } | Self::RadialGradient { from, .. } => *from,
        }
    }

    /// CSS `background` value.
    pub fn css(&self) -> String {
        match self {
            Self::Solid(base) => base.to_string(),
            Self::LinearGradient { angle, from, to } => {
                format!("linear-gradient({angle}deg, {from}, {to})")
            }
            Self::RadialGradient { from, to } => format!("radial-gradient(circle, {from}, {to})"),
        }
    }
}

/// Title/author ink colour, chosen against the base lightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextColor {
    /// Near-black ink for light covers.
    Dark,
    /// Off-white ink for dark covers.
    Light,
}

impl TextColor {
    pub fn css(&self) -> &'static str {
        match self {
            Self::Dark => "#111",
            Self::Light => "#f0f0f0",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverFont {
    Serif,
    SansSerif,
    Monospace,
}

impl CoverFont {
    /// Draw order used by the cover generator.
    pub const ALL: [CoverFont; 3] = [Self::Serif, Self::SansSerif, Self::Monospace];

    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Serif => "cover-font-serif",
            Self::SansSerif => "cover-font-sans-serif",
            Self::Monospace => "cover-font-monospace",
        }
    }
}

/// Decorative shape drawn in the middle of the cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Motif {
    None,
    Circle,
    Square,
    Triangle,
}

impl Motif {
    pub const ALL: [Motif; 4] = [Self::None, Self::Circle, Self::Square, Self::Triangle];

    pub fn class_name(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Circle => Some("motif-circle"),
            Self::Square => Some("motif-square"),
            Self::Triangle => Some("motif-triangle"),
        }
    }

    /// Markup for the motif container; empty for `Motif::None`.
    pub fn html(&self) -> String {
        match self.class_name() {
            Some(class) => format!("<div class=\"motif {class}\"></div>"),
            None => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Border {
    Transparent,
    Solid(Hsl),
}

impl Border {
    pub const WIDTH_PX: u32 = 8;

    pub fn css(&self) -> String {
        match self {
            Self::Transparent => format!("{}px solid transparent", Self::WIDTH_PX),
            Self::Solid(color) => format!("{}px solid {color}", Self::WIDTH_PX),
        }
    }
}

/// Visual attributes of a book cover. Recomputed from the seed, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverStyle {
    pub background: Background,
    pub text_color: TextColor,
    pub font: CoverFont,
    pub motif: Motif,
    pub border: Border,
}

impl CoverStyle {
    /// Motif ink; only present when a motif is drawn.
    pub fn motif_color(&self) -> Option<TextColor> {
        match self.motif {
            Motif::None => None,
            _ => Some(self.text_color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEAL: Hsl = Hsl {
        hue: 183,
        saturation: 49,
        lightness: 46,
    };
    const VIOLET: Hsl = Hsl {
        hue: 274,
        saturation: 49,
        lightness: 46,
    };

    #[test]
    fn hsl_css() {
        assert_eq!(TEAL.to_string(), "hsl(183, 49%, 46%)");
    }

    #[test]
    fn background_css() {
        assert_eq!(Background::Solid(TEAL).css(), "hsl(183, 49%, 46%)");
        assert_eq!(
            Background::LinearGradient {
                angle: 90,
                from: TEAL,
                to: VIOLET
            }
            .css(),
            "linear-gradient(90deg, hsl(183, 49%, 46%), hsl(274, 49%, 46%))"
        );
        assert_eq!(
            Background::RadialGradient {
                from: TEAL,
                to: VIOLET
            }
            .css(),
            "radial-gradient(circle, hsl(183, 49%, 46%), hsl(274, 49%, 46%))"
        );
    }

    #[test]
    fn gradient_base_is_first_stop() {
        let bg = Background::RadialGradient {
            from: TEAL,
            to: VIOLET,
        };
        assert_eq!(bg.base(), TEAL);
    }

    #[test]
    fn border_css() {
        assert_eq!(Border::Transparent.css(), "8px solid transparent");
        assert_eq!(Border::Solid(VIOLET).css(), "8px solid hsl(274, 49%, 46%)");
    }

    #[test]
    fn motif_markup() {
        assert_eq!(Motif::None.html(), "");
        assert_eq!(
            Motif::Triangle.html(),
            "<div class=\"motif motif-triangle\"></div>"
        );
    }

    #[test]
    fn motif_color_follows_text() {
        let mut style = CoverStyle {
            background: Background::Solid(TEAL),
            text_color: TextColor::Dark,
            font: CoverFont::Serif,
            motif: Motif::None,
            border: Border::Transparent,
        };
        assert_eq!(style.motif_color(), None);
        style.motif = Motif::Square;
        assert_eq!(style.motif_color(), Some(TextColor::Dark));
    }
}
