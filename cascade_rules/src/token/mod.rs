//! Token definitions: the pieces that sit in grid cells.

mod factory;

pub use factory::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a token, stable for the token's whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId(pub Uuid);

impl TokenId {
    /// Create an ID from a specific UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Create an ID from 16 random bytes (version 4 layout).
    pub fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Create a nil ID.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Token colors. Matching compares colors only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
    ];

    /// The first `size` colors of the enumeration, clamped to `1..=6`.
    pub fn palette(size: usize) -> &'static [Color] {
        &Self::ALL[..size.clamp(1, Self::ALL.len())]
    }
}

/// Area effect carried by a special token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialKind {
    /// Clears the token's whole row.
    RowClear,
    /// Clears the token's whole column.
    ColumnClear,
    /// Clears the 3x3 neighborhood around the token.
    AreaBomb,
}

/// A single game piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    pub color: Color,
    /// `Some` exactly when the token is special.
    pub special: Option<SpecialKind>,
}

impl Token {
    /// Create a plain token.
    pub fn new(id: TokenId, color: Color) -> Self {
        Self {
            id,
            color,
            special: None,
        }
    }

    /// Create a special token.
    pub fn special(id: TokenId, color: Color, kind: SpecialKind) -> Self {
        Self {
            id,
            color,
            special: Some(kind),
        }
    }

    pub fn is_special(&self) -> bool {
        self.special.is_some()
    }
}
