mod closure_builder;
mod package_filter;

pub use closure_builder::ClosureBuilder;
pub use package_filter::PackageFilter;
