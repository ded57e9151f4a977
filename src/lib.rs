pub mod cli;
pub mod cli_handlers;
pub mod commands;
pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod mcp;
pub mod message;
pub mod models;
pub mod parse;

pub use error::{MelloError, Result};
pub use models::*;
