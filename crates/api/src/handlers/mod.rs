pub mod domains;
pub mod events;
pub mod health;

pub use health::health_check;
