use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use anim::*;
pub use card::*;
pub use clock::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use hover::*;
pub use layout::*;
pub use snapshot::*;
pub use types::*;

mod anim;
mod card;
mod clock;
mod engine;
mod error;
mod generator;
mod hover;
mod layout;
mod snapshot;
mod types;

/// Dwell time over an eligible cell before its reveal starts.
pub const FILL_DURATION: Millis = 5000;

/// Length of one flip animation, either direction.
pub const FLIP_DURATION: Millis = 300;

/// How long a mismatched pair stays face-up before retracting.
pub const MISMATCH_DURATION: Millis = 1500;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub pairs: PairCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, pairs: PairCount) -> Self {
        Self { size, pairs }
    }

    pub fn new((size_x, size_y): Coord2, pairs: PairCount) -> Self {
        let size_x = size_x.clamp(1, Coord::MAX);
        let size_y = size_y.clamp(1, Coord::MAX);
        let max_pairs = (mult(size_x, size_y) / 2).clamp(1, PairCount::MAX as CellCount);
        let pairs = pairs.clamp(1, max_pairs as PairCount);
        Self::new_unchecked((size_x, size_y), pairs)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    /// The reference table: 4 columns by 3 rows, six pair identities.
    fn default() -> Self {
        Self::new_unchecked((4, 3), 6)
    }
}

/// Immutable pair-identity assignment for every cell of the table. Built
/// once per game by a [`DeckGenerator`] and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckLayout {
    faces: Array2<PairId>,
    pairs: PairCount,
}

impl DeckLayout {
    /// Builds a layout from explicit faces, inferring the identity count
    /// and checking that every identity appears exactly twice.
    pub fn from_faces(faces: Array2<PairId>) -> Result<Self> {
        let dim = faces.dim();
        if Coord::try_from(dim.0).is_err() || Coord::try_from(dim.1).is_err() {
            return Err(GameError::InvalidDeckShape);
        }
        let pairs = match faces.iter().map(|face| face.index()).max() {
            None => 0,
            Some(PairCount::MAX) => return Err(GameError::InvalidPairId),
            Some(max) => max + 1,
        };
        let layout = Self { faces, pairs };
        layout.validate()?;
        Ok(layout)
    }

    /// Builds a layout from row-major pair indices, `size` being `(x, y)`.
    pub fn from_pair_ids(size: Coord2, ids: &[u8]) -> Result<Self> {
        let (size_x, size_y) = size;
        if ids.len() != mult(size_x, size_y) as usize {
            return Err(GameError::InvalidDeckShape);
        }
        let faces = Array2::from_shape_fn((size_x as usize, size_y as usize), |(x, y)| {
            PairId::new(ids[y * size_x as usize + x])
        });
        Self::from_faces(faces)
    }

    /// Checks the pairing invariant: every identity below the declared
    /// count occurs exactly twice across the table.
    pub fn validate(&self) -> Result<()> {
        let mut counts: Vec<CellCount> = vec![0; self.pairs as usize];
        for &face in self.faces.iter() {
            let Some(slot) = counts.get_mut(face.index() as usize) else {
                return Err(GameError::InvalidPairId);
            };
            *slot += 1;
        }
        if counts.iter().any(|&count| count != 2) {
            return Err(GameError::UnevenPairs);
        }
        Ok(())
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            size: self.size(),
            pairs: self.pairs,
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.faces.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.faces.len().try_into().unwrap()
    }

    pub fn pair_count(&self) -> PairCount {
        self.pairs
    }

    pub fn face_at(&self, coords: Coord2) -> PairId {
        self[coords]
    }
}

impl Index<Coord2> for DeckLayout {
    type Output = PairId;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.faces[(x as usize, y as usize)]
    }
}
