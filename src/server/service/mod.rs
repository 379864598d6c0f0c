//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Orchestration**: Combining Slack directory lookups with stored player rows
//! - **Validation**: Running request bodies through the player schema
//! - **Transaction Management**: Committing each write as one unit

pub mod player;
pub mod slack;
