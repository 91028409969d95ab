//! Command implementations

pub mod health;
pub mod query;

pub use health::run_health;
pub use query::run_query;
