//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data structures
//! for use in unit tests and as default values for factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let player = fixture::player::entity();
//!
//! // Create with custom fields
//! let benched = fixture::player::entity_builder()
//!     .active(false)
//!     .build();
//! ```

pub mod player;

pub use player::{entity as player_entity, entity_builder as player_entity_builder};
