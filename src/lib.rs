//! # Message Board
//!
//! A minimal message board backend: CRUD over a single `messages` table,
//! JSON in and out, with [Sea-ORM](https://crates.io/crates/sea-orm) as the
//! database layer and [axum](https://crates.io/crates/axum) serving HTTP.
//!
//! ## Features
//!
//! - SQLite storage by default, PostgreSQL behind the `postgres` feature
//! - Schema created by an embedded Sea-ORM migrator on connect
//! - One transaction per mutating request, rolled back on any failure
//! - Uniform `{"error": "..."}` bodies that never carry database detail
//!
//! ## Quick Start
//!
//! ```no_run
//! use message_board::{router, Config, MessageStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env();
//! let store = MessageStore::connect(&config).await?;
//!
//! let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
//! axum::serve(listener, router(store.clone())).await?;
//!
//! store.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod entity;
pub mod error;
pub mod migration;
pub mod routes;
pub mod schema;
mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use routes::router;
pub use store::MessageStore;
