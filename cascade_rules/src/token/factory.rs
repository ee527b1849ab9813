//! Token factory: the single source of randomness for the rules.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Color, SpecialKind, Token, TokenId};

/// Produces tokens with fresh ids and random colors.
///
/// Can be seeded for deterministic boards and refills, or created from
/// system entropy.
#[derive(Debug, Clone)]
pub struct TokenFactory<R = StdRng> {
    rng: R,
    palette_size: usize,
}

impl TokenFactory<StdRng> {
    /// Create with a specific seed for deterministic behavior.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Create from system entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl<R: Rng> TokenFactory<R> {
    /// Wrap an existing random source. Uses the full color enumeration.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            palette_size: Color::ALL.len(),
        }
    }

    /// Restrict colors to the first `size` entries of the enumeration.
    pub fn with_palette_size(mut self, size: usize) -> Self {
        self.palette_size = size;
        self
    }

    /// Colors this factory draws from.
    pub fn palette(&self) -> &'static [Color] {
        Color::palette(self.palette_size)
    }

    /// Pick a color uniformly from the palette.
    pub fn random_color(&mut self) -> Color {
        let palette = self.palette();
        palette[self.rng.random_range(0..palette.len())]
    }

    /// Pick a color uniformly from the palette, skipping `excluded`.
    ///
    /// Falls back to the full palette if every color is excluded.
    pub fn random_color_except(&mut self, excluded: &[Color]) -> Color {
        let allowed: Vec<Color> = self
            .palette()
            .iter()
            .copied()
            .filter(|c| !excluded.contains(c))
            .collect();
        if allowed.is_empty() {
            return self.random_color();
        }
        allowed[self.rng.random_range(0..allowed.len())]
    }

    /// Draw a fresh token id.
    pub fn next_id(&mut self) -> TokenId {
        TokenId::from_random_bytes(self.rng.random())
    }

    /// Create a token. A missing color is chosen at random.
    pub fn create(&mut self, color: Option<Color>, special: Option<SpecialKind>) -> Token {
        let color = match color {
            Some(color) => color,
            None => self.random_color(),
        };
        Token {
            id: self.next_id(),
            color,
            special,
        }
    }

    /// Create a plain token of a random color.
    pub fn random_token(&mut self) -> Token {
        self.create(None, None)
    }

    /// Create a special token of a random color.
    pub fn special_token(&mut self, kind: SpecialKind) -> Token {
        self.create(None, Some(kind))
    }
}
