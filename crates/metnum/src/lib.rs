//! metnum library: configuration, bootstrap and exit codes of the binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
