//! Player identification.
//!
//! ## Player
//!
//! Exactly two players take part. `Player::One` always moves first.
//! On the wire (prompts, numeric board dumps, Python) players are
//! encoded as `1` and `2`, matching the cell codes used by `Board`.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First to move (black stones).
    One,
    /// Second to move (white stones).
    Two,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Numeric code used in board dumps (`1` or `2`).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Parse a numeric code. Returns `None` for anything but `1` or `2`.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Stone colour name used when addressing the player.
    #[must_use]
    pub const fn colour(self) -> &'static str {
        match self {
            Player::One => "black",
            Player::Two => "white",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.code())
    }
}
