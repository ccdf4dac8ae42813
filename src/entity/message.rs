//! Message entity model for Sea-ORM database interaction.
//!
//! Maps to the `messages` table. Timestamps are owned by the entity itself:
//! [`ActiveModelBehavior::before_save`] stamps `created_at` on insert and
//! refreshes `updated_at` on every save, so no caller can forget either.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::Serialize;

/// Sea-ORM entity model representing a single message board post.
///
/// The model doubles as the JSON representation returned by the API:
/// `{id, body, username, created_at, updated_at}` with RFC 3339 timestamps.
///
/// # Database Schema
///
/// | Column     | Type                          | Description                        |
/// |------------|-------------------------------|------------------------------------|
/// | id         | INTEGER (Primary Key, serial) | Server-assigned, never reused      |
/// | body       | TEXT                          | Message text                       |
/// | username   | TEXT                          | Author name                        |
/// | created_at | TIMESTAMPTZ                   | Set once, at insert                |
/// | updated_at | TIMESTAMPTZ                   | Refreshed on every mutation        |
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    /// Auto-incrementing primary key.
    #[sea_orm(primary_key)]
    pub id: i32,

    /// The message text. No length constraint is enforced.
    #[sea_orm(column_type = "Text")]
    pub body: String,

    /// Name of the author. Not mutable after creation.
    #[sea_orm(column_type = "Text")]
    pub username: String,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

/// Messages have no relations to other entities.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        if insert {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}
