pub mod config;
pub mod error;
pub mod llm;
pub mod server;
pub mod triage;

pub use error::{Error, Result};
