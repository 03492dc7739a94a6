pub mod routes;
pub mod startup;
pub mod errors;
pub mod views;

pub use startup::{load_config, run_with_config};
