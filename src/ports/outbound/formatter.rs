use crate::application::read_models::GraphReadModel;
use crate::shared::Result;

/// GraphFormatter port for rendering a dependency graph
///
/// Implementations are pure string producers (plain text, DOT, DGML);
/// writing the result somewhere is the job of an `OutputPresenter`.
pub trait GraphFormatter {
    /// Renders the graph read model
    ///
    /// The returned text carries no trailing newline.
    fn format(&self, model: &GraphReadModel) -> Result<String>;
}
