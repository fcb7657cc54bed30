use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck shape does not match declared size")]
    InvalidDeckShape,
    #[error("Pair identity out of range")]
    InvalidPairId,
    #[error("Each pair identity must appear exactly twice")]
    UnevenPairs,
}

pub type Result<T> = core::result::Result<T, GameError>;
