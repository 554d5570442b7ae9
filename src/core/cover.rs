/// Cover style generator. Each attribute draws from its own facet stream;
/// the second gradient stop is only drawn for gradient backgrounds.

use crate::core::prng::Lcg;
use crate::schema::cover::{Background, Border, CoverFont, CoverStyle, Hsl, Motif, TextColor};
use crate::schema::facet::{CoverFacet, Facet};

const HUE: (u32, u32) = (0, 360);
const SATURATION: (u32, u32) = (40, 80);
const LIGHTNESS: (u32, u32) = (25, 60);
/// Offset of the second gradient stop from the base hue.
const GRADIENT_HUE_OFFSET: (u32, u32) = (30, 150);
const BORDER_HUE_OFFSET: (u32, u32) = (60, 120);
const BORDER_DARKEN: u32 = 15;
const BORDER_MIN_LIGHTNESS: u32 = 10;

fn draw(seed: &str, facet: CoverFacet, (min, max): (u32, u32)) -> u32 {
    Lcg::for_facet(seed, &Facet::Cover(facet)).range(min, max)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BackgroundKind {
    Solid,
    Linear,
    Radial,
}

/// Derive the cover style for `seed`.
pub fn cover_style(seed: &str) -> CoverStyle {
    let kind = [
        BackgroundKind::Solid,
        BackgroundKind::Linear,
        BackgroundKind::Radial,
    ][draw(seed, CoverFacet::BackgroundType, (0, 3)) as usize];

    let base = Hsl {
        hue: draw(seed, CoverFacet::Hue1, HUE),
        saturation: draw(seed, CoverFacet::Saturation1, SATURATION),
        lightness: draw(seed, CoverFacet::Lightness1, LIGHTNESS),
    };

    let background = match kind {
        BackgroundKind::Solid => Background::Solid(base),
        BackgroundKind::Linear | BackgroundKind::Radial => {
            let second = Hsl {
                hue: (base.hue + draw(seed, CoverFacet::Hue2, GRADIENT_HUE_OFFSET)) % 360,
                saturation: draw(seed, CoverFacet::Saturation2, SATURATION),
                lightness: draw(seed, CoverFacet::Lightness2, LIGHTNESS),
            };
            let angle = draw(seed, CoverFacet::GradientAngle, HUE);
            if kind == BackgroundKind::Linear {
                Background::LinearGradient {
                    angle,
                    from: base,
                    to: second,
                }
            } else {
                Background::RadialGradient {
                    from: base,
                    to: second,
                }
            }
        }
    };

    // Only the base lightness decides the ink, gradients included.
    let text_color = if base.lightness > 50 {
        TextColor::Dark
    } else {
        TextColor::Light
    };

    let font = *Lcg::for_facet(seed, &Facet::Cover(CoverFacet::FontStyle)).pick(&CoverFont::ALL);
    let motif = *Lcg::for_facet(seed, &Facet::Cover(CoverFacet::Motif)).pick(&Motif::ALL);

    let border = if Lcg::for_facet(seed, &Facet::Cover(CoverFacet::BorderType)).random() < 0.5 {
        Border::Solid(Hsl {
            hue: (base.hue + draw(seed, CoverFacet::BorderColorOffset, BORDER_HUE_OFFSET)) % 360,
            saturation: base.saturation,
            lightness: base
                .lightness
                .saturating_sub(BORDER_DARKEN)
                .max(BORDER_MIN_LIGHTNESS),
        })
    } else {
        Border::Transparent
    };

    tracing::debug!(seed, background = %background.css(), "cover style derived");

    CoverStyle {
        background,
        text_color,
        font,
        motif,
        border,
    }
}
