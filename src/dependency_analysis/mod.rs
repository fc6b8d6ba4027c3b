/// Domain layer - packages, the registry view and closure computation
///
/// Nothing in here performs I/O.
pub mod domain;
pub mod services;
