pub mod clean;
pub mod common;
pub mod configuration;
pub mod statistics;

pub use clean::{handle_clean, CleanOptions};
pub use configuration::handle_config;
pub use statistics::handle_stats;
