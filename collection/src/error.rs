#[cfg(feature = "std")]
use thiserror::Error;

/// Collection errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// Index outside the valid range for the operation
    #[cfg_attr(
        feature = "std",
        error("Index {index} is out of bounds for length {len}")
    )]
    IndexOutOfRange { index: usize, len: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CollectionError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} is out of bounds for length {}", index, len)
            }
        }
    }
}
