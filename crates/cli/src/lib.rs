//! Command surface for the uichat binary.

pub mod cli;
pub mod commands;
pub mod logging;
