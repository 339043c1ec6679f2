//! CLI commands.

pub mod pull;
