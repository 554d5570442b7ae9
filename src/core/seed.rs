/// Seeds for "surprise me" links and decorative catalog styling.
///
/// Neither is part of the determinism contract: both draw from whatever
/// `Rng` they are handed, the thread RNG by default.

use rand::Rng;

pub const DEFAULT_SEED_LENGTH: usize = 12;

const SEED_WORDS: [&str; 15] = [
    "Alpha", "Beta", "Gamma", "Delta", "Omega", "Sigma", "Orion", "Nova", "Cygnus", "Draco",
    "Lyra", "Phoenix", "Quasar", "Nebula", "Comet",
];
const SEED_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Two capitalised words padded with random alphanumerics, cut to `length`.
pub fn random_seed(rng: &mut impl Rng, length: usize) -> String {
    let mut seed = String::with_capacity(length.max(16));
    seed.push_str(SEED_WORDS[rng.gen_range(0..SEED_WORDS.len())]);
    seed.push_str(SEED_WORDS[rng.gen_range(0..SEED_WORDS.len())]);
    while seed.len() < length {
        seed.push(char::from(SEED_CHARS[rng.gen_range(0..SEED_CHARS.len())]));
    }
    seed.truncate(length);
    seed
}

/// A fresh seed from the thread RNG.
pub fn surprise_seed() -> String {
    random_seed(&mut rand::thread_rng(), DEFAULT_SEED_LENGTH)
}

/// Decorative colour and height for a catalog spine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpineStyle {
    pub hue: u32,
    pub saturation: u32,
    pub lightness: u32,
    pub height_px: u32,
}

impl SpineStyle {
    const HUES: [u32; 5] = [25, 40, 190, 220, 280];

    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            hue: Self::HUES[rng.gen_range(0..Self::HUES.len())],
            saturation: rng.gen_range(30..=50),
            lightness: rng.gen_range(30..=50),
            height_px: rng.gen_range(140..=180),
        }
    }

    pub fn background_css(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }

    pub fn height_css(&self) -> String {
        format!("{}px", self.height_px)
    }
}
