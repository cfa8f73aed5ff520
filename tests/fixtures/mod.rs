//! Test fixtures for drone-planner.
//!
//! Provides realistic test data including:
//! - The Edinburgh central area and no-fly zones served by the ILP REST service
//! - Restaurant locations and the Appleton Tower delivery base
//! - Small synthetic shapes for focused planner tests

pub mod edinburgh_locations;

pub use edinburgh_locations::*;
