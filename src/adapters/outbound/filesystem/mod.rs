/// Filesystem adapters for reading registries and writing output
mod control_parser;
mod file_reader;
mod file_writer;
mod lockfile_parser;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
