//! CLI argument types and parsing helpers.
mod cli;
mod parsers;
mod types;


pub use cli::TesterArgs;
pub use types::{HttpMethod, OutputFormat, PositiveU64, PositiveUsize};
