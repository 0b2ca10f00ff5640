pub mod args;
pub mod benchmark_runner;
pub mod client;
pub mod config;
pub mod data_source;
pub mod error;
pub mod logging;
pub mod plot;
pub mod sweep;
pub mod utils;
