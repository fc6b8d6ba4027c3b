/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the file system, the console and the output sink.
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod registry_reader;

pub use formatter::GraphFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use registry_reader::RegistryReader;
