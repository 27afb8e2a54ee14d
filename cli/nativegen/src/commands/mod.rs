//! CLI command implementations.

pub mod clean;
pub mod generate;
pub mod init;
pub mod inspect;
