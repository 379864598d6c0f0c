//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test rows with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let player = factory::player::create_player(&db).await?;
//!
//! // Using builder pattern for customization
//! let player = factory::player::PlayerFactory::new(&db)
//!     .slack_id("U1")
//!     .nickname("Al")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod player;

pub use player::{create_player, create_player_with_id, PlayerFactory};
