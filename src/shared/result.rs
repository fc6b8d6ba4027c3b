/// Crate-wide result type; errors are carried as `anyhow::Error` so that
/// `DependInfoError` values and context chains travel through the same channel.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
