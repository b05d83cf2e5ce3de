use thiserror::Error;

/// Errors reported by heap operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum HeapError {
    /// `pop`, `peek` or `replace` was called on a heap without elements.
    #[error("operation on an empty heap")]
    EmptyHeap,
}
