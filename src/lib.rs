//! drone-planner core
//!
//! Plans delivery drone flights that keep out of no-fly zones and, once
//! inside the central area, never leave it again.

pub mod traits;
pub mod geo;
pub mod geometry;
pub mod node;
pub mod planner;
pub mod request;
pub mod flightpath;
pub mod ilp_rest;
pub mod static_regions;
