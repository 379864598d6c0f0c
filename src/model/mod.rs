//! Request and response DTOs exposed over the HTTP API.

pub mod api;
pub mod player;
