//! Schema migrations for the message board.
//!
//! [`MessageStore::connect`](crate::MessageStore::connect) runs
//! [`Migrator::up`] on startup, so a fresh database file is usable
//! immediately.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    // Override the name of migration table to avoid conflicts
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("message_board_migrations").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_message_table::Migration)]
    }
}
