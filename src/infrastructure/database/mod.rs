// Gateway module for everything that talks to PostgreSQL.

pub mod accounts;
mod engine;
mod error;
mod lifecycle;
mod postgres_repository;
mod schema;
mod session;


pub use engine::{Engine, PoolStats};
pub use error::DatabaseError;
pub use lifecycle::{
    connect_with_retry, database, init_database_with_retry_from_env, install_database, Database,
};
pub use postgres_repository::{create_postgres_repository, PostgresRepository};
pub use schema::{create_all, SCHEMA};
pub use session::{Session, SessionFactory};
