/// Type alias for Result with anyhow::Error as the error type.
/// Adapter and application code propagate errors through this alias.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
