pub mod common;
pub mod examples;
pub mod kind;
pub mod kinds;
