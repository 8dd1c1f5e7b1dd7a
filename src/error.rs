use thiserror::Error;

/// The ways a list operation can fail.
///
/// Every failing operation leaves the list exactly as it was before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The index is outside the range accepted by the operation:
    /// `0..len` for access and removal, `0..=len` for insertion.
    #[error("bad index: {index} is out of bounds for a list of length {len}")]
    BadIndex { index: usize, len: usize },

    /// A fixed-capacity list is already full.
    #[error("capacity exceeded: the list cannot hold more than {capacity} elements")]
    CapacityExceeded { capacity: usize },

    /// The operation needs an element but the list has none.
    #[error("the list is empty")]
    Empty,

    /// Chunks must be able to hold at least one element.
    #[error("invalid chunk size: chunks must hold at least one element")]
    InvalidChunkSize,
}

pub type Result<T, E = ListError> = std::result::Result<T, E>;
