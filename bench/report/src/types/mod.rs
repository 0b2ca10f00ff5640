pub mod best_result;
pub mod direction;
pub mod hardware;
pub mod params;
pub mod report;
pub mod result_set;
pub mod run_result;
pub mod sweep_kind;
pub mod transfer_config;
