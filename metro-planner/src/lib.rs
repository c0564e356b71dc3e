//! Metro route planner.
//!
//! Answers "how do I get from this station to that one?" over a metro
//! network of stations and lines: a primary route with the fewest
//! practical changes, an optional alternate, and the fare for each.

pub mod domain;
pub mod network;
pub mod planner;
pub mod web;
