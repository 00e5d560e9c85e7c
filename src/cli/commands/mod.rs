//! CLI command implementations
//!
//! Each command returns a process exit code: 0 success, 2 configuration
//! error, 3 patient input error, 5 fatal error.

pub mod assess;
pub mod dating;
pub mod init;
pub mod validate;
