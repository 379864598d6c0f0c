//! Database repository layer.
//!
//! Repositories handle database operations (CRUD) for each domain in the application.
//! They use SeaORM entity models internally and return domain models to keep the data
//! layer separate from business logic.

pub mod player;
