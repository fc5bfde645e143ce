//! CLI library components for fieldcheck.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
