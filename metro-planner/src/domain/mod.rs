//! Domain types for the metro route planner.
//!
//! Stations and lines are input records supplied by the network data
//! file. Routes are the planner's output. Types that carry invariants
//! enforce them at construction time.

mod error;
mod fare;
mod ids;
mod line;
mod route;
mod station;

pub use error::DomainError;
pub use fare::{FareBand, FareError, FareTable};
pub use ids::{LineId, StationId};
pub use line::Line;
pub use route::{PathStep, Route, RouteSegment};
pub use station::{Exit, Language, Station};
