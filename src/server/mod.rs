//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the player resource: API endpoints,
//! business logic, data access and the Slack directory client. The backend uses Axum as
//! the web framework, SeaORM for database operations and reqwest for the Slack Web API.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and response envelopes
//! - **Service Layer** (`service/`) - Orchestration of directory lookups and persistence
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, enrichment and operation parameters
//! - **Schema Layer** (`schema/`) - Request body validation, loading and serialization
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the player controller
//! 2. **Controller** extracts path, query and raw body, calls the service
//! 3. **Service** asks Slack for the user(s); a failure ends the request with 503
//! 4. **Data** reads or writes player rows, inside a transaction for writes
//! 5. **Model** merges the Slack profile into the player
//! 6. **Controller** serializes through the schema and wraps the result in `{ "data": ... }`

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod schema;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
