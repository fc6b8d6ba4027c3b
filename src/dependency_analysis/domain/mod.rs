pub mod closure_map;
pub mod package;
pub mod registry;

pub use closure_map::ClosureMap;
pub use package::{Feature, Package, PackageName};
pub use registry::{PackageRegistry, RegistryView};
