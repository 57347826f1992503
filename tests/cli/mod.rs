pub mod config;
pub mod errors;
pub mod logging;
pub mod shortest;
pub mod support;
