use thiserror::Error;

/// Reason a [`crate::Simplex`] failed to validate (see
/// [`crate::Simplex::new`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidSimplexReason {
    /// The number of vertices was not `dimension + 1`.
    WrongCount,
    /// A vertex's value was not a plain finite scalar.
    NonScalarValue,
    /// Not every vertex had the same point dimension.
    InconsistentDimension,
}

/// Errors surfaced at the public boundaries of this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A [`crate::Simplex`] was built from vertices that don't form a valid
    /// simplex.
    #[error("invalid simplex: {reason:?}")]
    InvalidSimplex { reason: InvalidSimplexReason },

    /// A bound calculator was handed something other than the `Simplex` it
    /// expects.
    #[error("invalid input to bound calculator")]
    InvalidInput,

    /// A Lipschitz constant passed to [`crate::bound::OrdinaryPointBoundCalculator::new`]
    /// was negative.
    #[error("Lipschitz constant must be non-negative, got {value}")]
    InvalidLipschitzConstant { value: f64 },

    /// [`crate::queue::PriorityQueue::pop_min`] was called on an empty queue.
    #[error("pop_min called on an empty queue")]
    EmptyQueue,
}

pub type Result<T> = std::result::Result<T, Error>;
