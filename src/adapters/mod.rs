/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports: reading the
/// registry from disk, rendering graphs and writing diagnostics.
pub mod outbound;
