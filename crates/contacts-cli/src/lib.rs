//! CLI library components for the contact converter.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod types;
