use crate::logs::application::ports::outgoing::{LogRepository, LogRepositoryError};
use crate::logs::domain::entities::{LogEntry, LogLevel};
use async_trait::async_trait;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;

use super::sea_orm_entity::{
    ActiveModel as LogActiveModel, Column as LogColumn, Entity as LogEntity, Model as LogModel,
};

#[derive(Debug, Clone)]
pub struct LogRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl LogRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_domain(model: LogModel) -> Result<LogEntry, LogRepositoryError> {
    let level = LogLevel::parse(&model.level).ok_or_else(|| {
        LogRepositoryError::DatabaseError(format!(
            "unknown log level '{}' in row {}",
            model.level, model.id
        ))
    })?;

    Ok(LogEntry {
        content: model.content,
        level,
        production: model.production,
        timestamp: model.timestamp,
    })
}

#[async_trait]
impl LogRepository for LogRepoPostgres {
    async fn insert(&self, entry: LogEntry) -> Result<(), LogRepositoryError> {
        let active_model = LogActiveModel {
            id: NotSet,
            content: Set(entry.content),
            level: Set(entry.level.as_str().to_owned()),
            production: Set(entry.production),
            timestamp: Set(entry.timestamp),
        };

        LogEntity::insert(active_model)
            .exec(&*self.db)
            .await
            .map_err(|err| LogRepositoryError::DatabaseError(err.to_string()))?;

        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<LogEntry>, LogRepositoryError> {
        let models: Vec<LogModel> = LogEntity::find()
            .order_by_asc(LogColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|err| LogRepositoryError::DatabaseError(err.to_string()))?;

        models.into_iter().map(to_domain).collect()
    }
}
