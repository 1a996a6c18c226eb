use thiserror::Error;

/// Error indicating a misuse of a [`Simplex`](crate::query::gjk::Simplex).
///
/// These errors signal integration bugs in the calling code, never a
/// numerical edge case: the expected numerical outcomes of a query are
/// reported through [`QueryStatus`](crate::query::QueryStatus) instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum SimplexError {
    /// An operation was requested on a simplex with no active vertex.
    #[error("the simplex has no active vertex")]
    Empty,
    /// More active vertices were requested than the simplex currently holds.
    #[error("the simplex has {actual} active vertices but {requested} were requested")]
    NotEnoughVertices {
        /// The number of active vertices of the simplex.
        actual: usize,
        /// The number of vertices the operation needed.
        requested: usize,
    },
    /// A vertex insertion was attempted on a simplex with all 4 slots in use.
    #[error("cannot add a vertex to a full simplex")]
    Full,
}
