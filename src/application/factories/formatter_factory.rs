use crate::adapters::outbound::formatters::{DgmlFormatter, DotFormatter, TextFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::GraphFormatter;

/// Factory for creating graph formatters
///
/// Keeps the mapping from `OutputFormat` to concrete formatter adapters in
/// the application layer.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use dep_info::application::dto::OutputFormat;
    /// use dep_info::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Dot);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn GraphFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new()),
            OutputFormat::Dot => Box::new(DotFormatter::new()),
            OutputFormat::Dgml => Box::new(DgmlFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use dep_info::application::dto::OutputFormat;
    /// use dep_info::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Dgml);
    /// assert_eq!(message, "📝 Generating DGML graph output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Text => "📝 Generating dependency listing...",
            OutputFormat::Dot => "📝 Generating DOT graph output...",
            OutputFormat::Dgml => "📝 Generating DGML graph output...",
        }
    }
}
