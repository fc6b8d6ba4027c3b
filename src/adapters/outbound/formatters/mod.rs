/// Formatter adapters for the supported output formats
mod dgml_formatter;
mod dot_formatter;
mod text_formatter;

pub use dgml_formatter::DgmlFormatter;
pub use dot_formatter::DotFormatter;
pub use text_formatter::TextFormatter;
