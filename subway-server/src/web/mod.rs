//! Web layer for the subway server.
//!
//! JSON endpoints for editing stations and lines and querying paths.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, Subway};
