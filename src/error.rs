use std::collections::TryReserveError;
use thiserror::Error;

/// Errors returned by the operations of [`List`] and [`ArrayList`].
///
/// [`List`]: crate::List
/// [`ArrayList`]: crate::ArrayList
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation needs at least one element.
    #[error("the list is empty")]
    EmptyCollection,
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("the list is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// No element matched a search.
    #[error("no matching element")]
    NotFound,
    #[error("the element is the first one and has no predecessor")]
    NoPredecessor,
    #[error("the element is the last one and has no successor")]
    NoSuccessor,
    /// The backing storage could not be grown.
    #[error("allocation failed: {0}")]
    AllocationFailure(#[from] TryReserveError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn error_messages() {
        assert_eq!(Error::EmptyCollection.to_string(), "the list is empty");
        assert_eq!(
            Error::IndexOutOfRange { index: 4, len: 2 }.to_string(),
            "index 4 is out of range for a list of length 2"
        );
        assert_eq!(
            Error::CapacityExceeded { capacity: 3 }.to_string(),
            "the list is full (capacity 3)"
        );
        assert_eq!(
            Error::InvalidArgument("capacity must be positive").to_string(),
            "invalid argument: capacity must be positive"
        );
    }

    #[test]
    fn allocation_failure_from_try_reserve() {
        let mut buffer = Vec::<u64>::new();
        let err = buffer.try_reserve(usize::MAX).unwrap_err();
        let err = Error::from(err);
        assert!(matches!(err, Error::AllocationFailure(_)));
    }
}
