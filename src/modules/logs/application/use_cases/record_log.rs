use crate::logs::application::ports::outgoing::{LogRepository, LogRepositoryError};
use crate::logs::domain::entities::{LogEntry, LogLevel};
use chrono::Utc;

#[derive(Debug, Clone, PartialEq)]
pub enum RecordLogError {
    EmptyContent,
    RepositoryError(String),
}

/// Validates an incoming log message, stamps it with the server time and the
/// deployment environment flag, and persists it.
#[derive(Debug, Clone)]
pub struct RecordLogUseCase<R>
where
    R: LogRepository,
{
    log_repository: R,
    production: bool,
}

impl<R> RecordLogUseCase<R>
where
    R: LogRepository,
{
    /// `production` comes from the deployment environment (`RUST_ENV`), not
    /// from the host operating system.
    pub fn new(repository: R, production: bool) -> Self {
        Self {
            log_repository: repository,
            production,
        }
    }
}

#[async_trait::async_trait]
pub trait IRecordLogUseCase: Send + Sync {
    async fn execute(&self, content: String, level: LogLevel) -> Result<LogEntry, RecordLogError>;
}

#[async_trait::async_trait]
impl<R> IRecordLogUseCase for RecordLogUseCase<R>
where
    R: LogRepository + Send + Sync,
{
    async fn execute(&self, content: String, level: LogLevel) -> Result<LogEntry, RecordLogError> {
        if content.is_empty() {
            return Err(RecordLogError::EmptyContent);
        }

        let entry = LogEntry {
            content,
            level,
            production: self.production,
            timestamp: Utc::now().timestamp_millis(),
        };

        self.log_repository
            .insert(entry.clone())
            .await
            .map_err(|e| match e {
                LogRepositoryError::DatabaseError(msg) => RecordLogError::RepositoryError(msg),
            })?;

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockLogRepository {
        pub inserted: Mutex<Vec<LogEntry>>,
        pub should_fail_db: bool,
    }

    #[async_trait]
    impl LogRepository for MockLogRepository {
        async fn insert(&self, entry: LogEntry) -> Result<(), LogRepositoryError> {
            if self.should_fail_db {
                return Err(LogRepositoryError::DatabaseError(
                    "DB connection failed".to_string(),
                ));
            }
            self.inserted.lock().unwrap().push(entry);
            Ok(())
        }

        async fn fetch_all(&self) -> Result<Vec<LogEntry>, LogRepositoryError> {
            unimplemented!("not used in record tests")
        }
    }

    #[tokio::test]
    async fn test_record_log_success() {
        let before = Utc::now().timestamp_millis();
        let use_case = RecordLogUseCase::new(MockLogRepository::default(), false);

        let result = use_case
            .execute("hello".to_string(), LogLevel::Info)
            .await
            .unwrap();

        assert_eq!(result.content, "hello");
        assert_eq!(result.level, LogLevel::Info);
        assert!(!result.production);
        assert!(result.timestamp >= before);
        assert!(result.timestamp <= Utc::now().timestamp_millis());
    }

    #[tokio::test]
    async fn test_record_log_production_flag_comes_from_environment() {
        let use_case = RecordLogUseCase::new(MockLogRepository::default(), true);

        let result = use_case
            .execute("deployed".to_string(), LogLevel::Warn)
            .await
            .unwrap();

        assert!(result.production);
    }

    #[tokio::test]
    async fn test_record_log_rejects_empty_content() {
        let repo = MockLogRepository::default();
        let use_case = RecordLogUseCase::new(repo, false);

        let result = use_case.execute(String::new(), LogLevel::Info).await;

        assert_eq!(result, Err(RecordLogError::EmptyContent));
    }

    #[tokio::test]
    async fn test_record_log_db_error() {
        let repo = MockLogRepository {
            should_fail_db: true,
            ..Default::default()
        };
        let use_case = RecordLogUseCase::new(repo, false);

        let result = use_case.execute("hello".to_string(), LogLevel::Error).await;

        match result {
            Err(RecordLogError::RepositoryError(msg)) => {
                assert_eq!(msg, "DB connection failed");
            }
            other => panic!("Expected RepositoryError, got {other:?}"),
        }
    }
}
