//! CLI command implementations
//!
//! Each command returns a process exit code: 0 success, 2 configuration error, 5 fatal.

pub mod init;
pub mod serve;
pub mod validate;
