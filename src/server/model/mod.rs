//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs by the schema layer. Slack users are converted from the wire
//! format at the client boundary.

pub mod player;
pub mod slack;
