/// Seeded linear congruential generator behind every generated book.
///
/// A fresh `Lcg` is derived for each facet from `seed + label`; streams are
/// never continued across facets, so adding or removing one generation step
/// leaves every other output untouched.

use rand::RngCore;

use crate::schema::facet::Facet;

/// Modulus 2^32.
const MODULUS: i64 = 1 << 32;
/// Multiplier and increment from Numerical Recipes.
const MULTIPLIER: i64 = 1_664_525;
const INCREMENT: i64 = 1_013_904_223;

/// 32-bit polynomial rolling hash (`hash * 31 + unit`) over UTF-16 code units.
pub fn hash_seed(input: &str) -> i32 {
    input
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: i64,
}

impl Lcg {
    /// Initialise from an arbitrary string key.
    pub fn from_key(key: &str) -> Self {
        Self {
            state: i64::from(hash_seed(key)),
        }
    }

    /// Initialise the stream for `facet` of the book identified by `seed`.
    pub fn for_facet(seed: &str, facet: &Facet) -> Self {
        Self::from_key(&facet.key(seed))
    }

    /// Discard the current stream and restart from `key`.
    pub fn reseed(&mut self, key: &str) {
        self.state = i64::from(hash_seed(key));
    }

    pub fn state(&self) -> i64 {
        self.state
    }

    /// One LCG step. The remainder is Euclidean: the state right after
    /// seeding may be negative, the stepped state never is.
    fn step(&mut self) -> u32 {
        self.state = (MULTIPLIER * self.state + INCREMENT).rem_euclid(MODULUS);
        self.state as u32
    }

    /// Uniform float in `[0, 1)`.
    pub fn random(&mut self) -> f64 {
        f64::from(self.step()) / MODULUS as f64
    }

    /// Element at `floor(random() * len)`.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty. Tables are validated on load, so an
    /// empty slice here is a programming error.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let index = (self.random() * items.len() as f64) as usize;
        &items[index]
    }

    /// Integer in `[min, max)`.
    pub fn range(&mut self, min: u32, max: u32) -> u32 {
        debug_assert!(min < max, "empty range {min}..{max}");
        (self.random() * f64::from(max - min)) as u32 + min
    }

    /// Fisher-Yates shuffle of a copy; `items` is left untouched.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        let mut remaining = out.len();
        while remaining > 0 {
            let i = (self.random() * remaining as f64) as usize;
            remaining -= 1;
            out.swap(remaining, i);
        }
        out
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.step());
        let low = u64::from(self.step());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn hash_golden_values() {
        assert_eq!(hash_seed(""), 0);
        assert_eq!(hash_seed("a"), 97);
        assert_eq!(hash_seed("abc"), 96354);
        assert_eq!(hash_seed("TestSeed123"), -1048141553);
        assert_eq!(hash_seed("TestSeed123title"), 513987241);
        assert_eq!(hash_seed("héllo"), 103094734);
    }

    #[test]
    fn hash_uses_utf16_units() {
        // U+1F600 is a surrogate pair: 0xD83D, 0xDE00.
        assert_eq!(hash_seed("\u{1F600}"), 1772899);
    }

    #[test]
    fn empty_seed_stream() {
        let mut rng = Lcg::from_key("");
        assert_eq!(rng.state(), 0);
        assert_eq!(rng.random(), 0.23606797284446657);
        assert_eq!(rng.random(), 0.278566908556968);
        assert_eq!(rng.random(), 0.8195337599609047);
        assert_eq!(rng.state(), 3519870697);
    }

    #[test]
    fn negative_hash_stream() {
        let mut rng = Lcg::from_key("TestSeed123");
        assert_eq!(rng.state(), -1048141553);
        assert_eq!(rng.random(), 0.4332291563041508);
        assert_eq!(rng.random(), 0.9974651394877583);
        assert_eq!(rng.random(), 0.8973738336935639);
        assert_eq!(rng.state(), 3854191268);
    }

    #[test]
    fn reseed_restarts_stream() {
        let mut rng = Lcg::from_key("first");
        rng.random();
        rng.reseed("TestSeed123");
        assert_eq!(rng, Lcg::from_key("TestSeed123"));
    }

    #[test]
    fn facet_stream_matches_composite_key() {
        let a = Lcg::for_facet("TestSeed123", &Facet::Title);
        let b = Lcg::from_key("TestSeed123title");
        assert_eq!(a, b);
    }

    #[test]
    fn range_stays_in_bounds() {
        let mut rng = Lcg::from_key("bounds");
        for _ in 0..10_000 {
            let v = rng.range(25, 60);
            assert!((25..60).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn pick_distribution_is_roughly_uniform() {
        let items = [0usize, 1, 2, 3, 4];
        let mut counts = [0u32; 5];
        let mut rng = Lcg::from_key("uniform");
        for _ in 0..10_000 {
            counts[*rng.pick(&items)] += 1;
        }
        for (i, &count) in counts.iter().enumerate() {
            assert!(
                (1700..=2300).contains(&count),
                "bucket {i} drew {count} of 10000"
            );
        }
    }

    #[test]
    #[should_panic]
    fn pick_empty_panics() {
        let empty: [&str; 0] = [];
        Lcg::from_key("x").pick(&empty);
    }

    #[test]
    fn shuffle_is_a_permutation_of_a_copy() {
        let items: Vec<u32> = (0..20).collect();
        let mut rng = Lcg::from_key("shuffle");
        let shuffled = rng.shuffle(&items);
        assert_eq!(items, (0..20).collect::<Vec<_>>());
        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, items);
        assert_ne!(shuffled, items);
    }

    #[test]
    fn shuffle_is_deterministic() {
        let items = ["a", "b", "c", "d", "e", "f"];
        let first = Lcg::from_key("same").shuffle(&items);
        let second = Lcg::from_key("same").shuffle(&items);
        assert_eq!(first, second);
    }

    #[test]
    fn drives_rand_api() {
        let mut a = Lcg::from_key("rand");
        let mut b = Lcg::from_key("rand");
        let xs: Vec<u8> = (0..16).map(|_| a.gen_range(0..10)).collect();
        let ys: Vec<u8> = (0..16).map(|_| b.gen_range(0..10)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|&x| x < 10));
    }

    #[test]
    fn next_u32_is_one_step() {
        let mut a = Lcg::from_key("");
        assert_eq!(a.next_u32(), 1013904223);
    }
}
