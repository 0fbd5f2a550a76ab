//! CLI library components for the regulatory review pipeline.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
