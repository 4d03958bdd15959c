use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::scope_path::normalize;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "burrow_lib=info";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// The only directory the window lists and mutates. Fixed for the
    /// lifetime of the process.
    pub browsing_root: PathBuf,
}

impl AppConfig {
    pub fn from_process() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to resolve the working directory")?;
        if !cwd.is_dir() {
            anyhow::bail!("working directory is not a directory: {}", cwd.display());
        }
        Ok(Self::with_root(cwd))
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self {
            browsing_root: normalize(&root),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_root_canonicalizes_existing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let dotted = dir.path().join(".");

        let config = AppConfig::with_root(dotted);

        assert_eq!(config.browsing_root, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn from_process_uses_working_directory() {
        let config = AppConfig::from_process().unwrap();
        assert!(config.browsing_root.is_dir());
        assert!(config.browsing_root.is_absolute());
    }
}
