use crate::logs::application::ports::outgoing::{LogRepository, LogRepositoryError};
use crate::logs::domain::entities::LogEntry;

#[derive(Debug, Clone)]
pub enum FetchLogsError {
    RepositoryError(String),
}

/// Retrieves stored log entries, optionally restricted to production-flagged
/// ones, preserving insertion order.
#[derive(Debug, Clone)]
pub struct FetchLogsUseCase<R>
where
    R: LogRepository,
{
    log_repository: R,
}

impl<R> FetchLogsUseCase<R>
where
    R: LogRepository,
{
    pub fn new(repository: R) -> Self {
        Self {
            log_repository: repository,
        }
    }
}

#[async_trait::async_trait]
pub trait IFetchLogsUseCase: Send + Sync {
    async fn execute(&self, production_only: bool) -> Result<Vec<LogEntry>, FetchLogsError>;
}

#[async_trait::async_trait]
impl<R> IFetchLogsUseCase for FetchLogsUseCase<R>
where
    R: LogRepository + Send + Sync,
{
    async fn execute(&self, production_only: bool) -> Result<Vec<LogEntry>, FetchLogsError> {
        let entries = self.log_repository.fetch_all().await.map_err(|e| match e {
            LogRepositoryError::DatabaseError(msg) => FetchLogsError::RepositoryError(msg),
        })?;

        if production_only {
            return Ok(entries.into_iter().filter(|e| e.production).collect());
        }

        Ok(entries)
    }
}
