//! Game mechanics: scoring and level progression.

mod levels;

pub use levels::*;

/// Points awarded per cleared token.
pub const POINTS_PER_TOKEN: u32 = 10;

/// Multiplier applied when a special effect caused the clear.
pub const SPECIAL_MULTIPLIER: u32 = 2;

/// Points for clearing `matched` tokens.
///
/// Doubled when the clear came from a special token's effect. There are no
/// combo or streak modifiers.
pub fn score(matched: usize, special_effect_used: bool) -> u32 {
    let base = (matched as u32).saturating_mul(POINTS_PER_TOKEN);
    if special_effect_used {
        base.saturating_mul(SPECIAL_MULTIPLIER)
    } else {
        base
    }
}
