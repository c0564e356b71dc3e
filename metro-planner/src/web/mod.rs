//! Web layer for the metro planner.
//!
//! JSON endpoints for station lookup and route planning.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
