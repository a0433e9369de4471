//! Catch-all detection infrastructure layer
pub mod database;
pub mod repositories;
