//! CLI command implementations.

pub mod create;
pub mod list;
pub mod vocals;

use std::path::PathBuf;

/// Default workspace directory: `~/.songforge` (falling back to the
/// current directory when no home is known).
pub fn default_workspace_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".songforge")
}
