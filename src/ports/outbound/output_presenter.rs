use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the rendered graph is written.
pub trait OutputPresenter {
    /// Writes `content` followed by a single newline
    ///
    /// Empty content adds no newline. A file destination is still replaced,
    /// leaving an empty file; stdout receives nothing.
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
