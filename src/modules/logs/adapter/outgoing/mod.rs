pub(crate) mod log_repo_postgres;
mod sea_orm_entity;

pub use log_repo_postgres::LogRepoPostgres;
