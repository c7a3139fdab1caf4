//! Error types for table construction

/// Errors raised while building a table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Bucket count must be at least one
    #[error("invalid bucket limit {limit}: a table needs at least one bucket")]
    InvalidLimit { limit: usize },
}
