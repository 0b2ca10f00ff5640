mod error;
pub mod plotting;
mod prints;
pub mod recorder;
pub mod selector;
mod types;
mod utils;

pub use error::ReportError;
pub use types::*;
