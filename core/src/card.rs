use serde::{Deserialize, Serialize};

use crate::{Coord2, Millis};

/// Identity of a card front face; exactly two cells share each identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairId(u8);

impl PairId {
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Back-face art, alternating in a checkerboard over the table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardBack {
    Blue,
    Red,
}

impl CardBack {
    pub const fn for_cell((x, y): Coord2) -> Self {
        if x % 2 == y % 2 { Self::Blue } else { Self::Red }
    }
}

/// Gameplay state of a single cell. The animating states carry their own
/// start time, so a cell can hold at most one animation.
///
/// Valid transitions:
/// - Hidden -> FlippingForward (hover fill completed)
/// - FlippingForward -> Revealed (animation completed)
/// - Revealed -> Matched (pair resolved equal; terminal)
/// - Revealed -> FlippingBackward (mismatch window elapsed)
/// - FlippingBackward -> Hidden (animation completed)
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CardState {
    Hidden,
    FlippingForward { started_at: Millis },
    Revealed { revealed_at: Millis },
    FlippingBackward { started_at: Millis },
    Matched,
}

impl CardState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_matched(self) -> bool {
        matches!(self, Self::Matched)
    }

    pub const fn is_flipping(self) -> bool {
        matches!(
            self,
            Self::FlippingForward { .. } | Self::FlippingBackward { .. }
        )
    }

    /// Whether the front face is fully shown (settled, not mid-animation).
    pub const fn is_face_up(self) -> bool {
        matches!(self, Self::Revealed { .. } | Self::Matched)
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self::Hidden
    }
}
