use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("blueprint needs at least 2 vertices (6 floats), got {0} floats")]
    BlueprintTooShort(usize),
    #[error("blueprint length {0} is not a multiple of 3")]
    BlueprintNotVec3(usize),
    #[error("instance count {count} does not match the {rows}x{cols} layout")]
    CountMismatch {
        count: usize,
        rows: usize,
        cols: usize,
    },
}
