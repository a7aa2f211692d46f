use crate::logs::domain::entities::LogEntry;
use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LogRepository: Send + Sync {
    /// Appends one entry. Entries are never updated or deleted.
    async fn insert(&self, entry: LogEntry) -> Result<(), LogRepositoryError>;

    /// Returns every stored entry in insertion order.
    async fn fetch_all(&self) -> Result<Vec<LogEntry>, LogRepositoryError>;
}
