//! Database entity models for the message board.
//!
//! This module contains the Sea-ORM entity definitions used by
//! [`MessageStore`](crate::MessageStore). The only entity is `message`,
//! which maps to the `messages` table created by the crate's migrator.

/// Message entity model for Sea-ORM database interaction.
pub mod message;
