/// Single coordinate axis used for table width, height, and positions.
pub type Coord = u8;

/// Count type used for totals over the whole table.
pub type CellCount = u16;

/// Count type used for pair identities and matched-pair tallies.
pub type PairCount = u8;

/// Milliseconds on the game's monotonic timeline.
pub type Millis = u64;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}
