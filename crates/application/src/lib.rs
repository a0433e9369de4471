//! Catch-all detection application layer
pub mod ports;
pub mod use_cases;
