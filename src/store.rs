use std::time::Duration;

use sea_orm::{
    ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, IntoActiveModel, QueryOrder, Set, TransactionTrait,
};
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::entity::message::{self, ActiveModel as MessageActiveModel, Entity as MessageEntity};
use crate::error::{Error, Operation, Result};
use crate::migration::Migrator;
use crate::schema::{MessagePatch, ValidNewMessage};

/// Handle to the relational store holding message rows.
///
/// `MessageStore` is the only path to persisted messages. It is cheap to
/// clone (the connection is a pool) and is passed to request handlers as
/// router state; nothing about it is global.
///
/// Every mutating operation runs inside its own transaction: begin, mutate,
/// then commit on success or roll back on any failure before the error is
/// returned. A failed request therefore never leaves a half-applied write.
///
/// # Usage
///
/// ```no_run
/// use message_board::{Config, MessageStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MessageStore::connect(&Config::new("sqlite://app.db?mode=rwc")).await?;
/// for message in store.list().await? {
///     println!("{}: {}", message.username, message.body);
/// }
/// store.close().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MessageStore {
    /// The Sea-ORM database connection used for database operations.
    conn: DatabaseConnection,
}

impl MessageStore {
    /// Wraps an existing connection. The schema is assumed to be in place.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Connects to the configured database and applies pending migrations.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let mut opt = ConnectOptions::new(config.database_url.clone());
        opt.max_connections(10)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        Self::connect_with(opt).await
    }

    /// Like [`connect`](Self::connect) but with caller-provided pool options.
    pub async fn connect_with(opt: ConnectOptions) -> Result<Self, DbErr> {
        let conn = Database::connect(opt).await?;
        Migrator::up(&conn, None).await?;
        info!("message store ready");

        Ok(Self::new(conn))
    }

    /// Closes the underlying pool. Outstanding clones become unusable.
    pub async fn close(self) -> Result<(), DbErr> {
        self.conn.close().await
    }

    /// Returns every message, oldest first.
    ///
    /// Rows sharing a `created_at` come back in id order, which is insertion
    /// order.
    pub async fn list(&self) -> Result<Vec<message::Model>> {
        MessageEntity::find()
            .order_by_asc(message::Column::CreatedAt)
            .order_by_asc(message::Column::Id)
            .all(&self.conn)
            .await
            .map_err(Error::persistence(Operation::List))
    }

    /// Inserts a new message and returns it with its assigned id and
    /// timestamps.
    pub async fn create(&self, new: ValidNewMessage) -> Result<message::Model> {
        let op = Operation::Create;
        let txn = self.begin(op).await?;

        let result = MessageActiveModel {
            body: Set(new.body),
            username: Set(new.username),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(Error::persistence(op));

        let created = finish(txn, op, result).await?;
        debug!(id = created.id, "message created");
        Ok(created)
    }

    /// Replaces the body of message `id`.
    ///
    /// `patch` is the request payload as it came off the wire; a payload that
    /// failed to parse arrives as its error. Existence is checked before the
    /// payload is looked at, so an unknown id is reported as
    /// [`Error::NotFound`] whatever the body holds.
    pub async fn update(&self, id: i32, patch: Result<MessagePatch>) -> Result<message::Model> {
        let op = Operation::Update;
        let txn = self.begin(op).await?;
        let result = apply_update(&txn, id, patch).await;

        let updated = finish(txn, op, result).await?;
        debug!(id, "message updated");
        Ok(updated)
    }

    /// Permanently removes message `id`.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let op = Operation::Delete;
        let txn = self.begin(op).await?;

        let result = match MessageEntity::delete_by_id(id).exec(&txn).await {
            Ok(res) if res.rows_affected == 0 => Err(Error::NotFound),
            Ok(_) => Ok(()),
            Err(e) => Err(Error::persistence(op)(e)),
        };

        finish(txn, op, result).await?;
        debug!(id, "message deleted");
        Ok(())
    }

    async fn begin(&self, op: Operation) -> Result<DatabaseTransaction> {
        self.conn.begin().await.map_err(Error::persistence(op))
    }
}

async fn apply_update(
    txn: &DatabaseTransaction,
    id: i32,
    patch: Result<MessagePatch>,
) -> Result<message::Model> {
    let op = Operation::Update;
    let existing = MessageEntity::find_by_id(id)
        .one(txn)
        .await
        .map_err(Error::persistence(op))?
        .ok_or(Error::NotFound)?;
    let body = patch?.validate()?;

    let mut active_model = existing.into_active_model();
    active_model.body = Set(body);
    active_model
        .update(txn)
        .await
        .map_err(Error::persistence(op))
}

/// Commits `txn` if `result` is a success, otherwise rolls it back and hands
/// the original error through.
async fn finish<T>(txn: DatabaseTransaction, op: Operation, result: Result<T>) -> Result<T> {
    match result {
        Ok(value) => {
            txn.commit().await.map_err(Error::persistence(op))?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                warn!(operation = %op, error = %rollback_err, "rollback failed");
            }
            Err(err)
        }
    }
}
