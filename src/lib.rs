pub mod cli;
pub mod config;
pub mod date;
pub mod error;
pub mod git;
pub mod latency;
pub mod model;

pub use error::{LatencyError, Result};
