//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the weighing core and an
//! external system (the build tool process, the filesystem).
//! Implementations live in `src/adapters/`.

pub mod command;
pub mod filesystem;

pub use command::{CommandOutput, CommandRunner};
pub use filesystem::FileSystem;

/// Boxed error returned by every port method.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;
