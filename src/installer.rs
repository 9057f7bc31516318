//! Writing content over the system hosts file.
//!
//! Content is first written completely to a temporary file, then a
//! [`PrivilegedExecutor`] copies it onto the target. If the copy is refused
//! the target keeps its previous content.

use crate::error::{Error, Result};
use crate::util::is_root;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Copies a file onto a target that may require elevated rights.
pub trait PrivilegedExecutor {
    /// Replaces the content of `target` with the content of `source`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Permission`] if elevation is refused, or
    /// [`Error::Io`] on other I/O failures.
    fn copy(&self, source: &Path, target: &Path) -> Result<()>;
}

/// Copies in-process without elevation.
///
/// The target is truncated and rewritten in place, so its mode and owner
/// are kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectExecutor;

impl PrivilegedExecutor for DirectExecutor {
    fn copy(&self, source: &Path, target: &Path) -> Result<()> {
        let content = std::fs::read(source)?;
        std::fs::write(target, content)?;
        Ok(())
    }
}

/// Copies directly when already root, otherwise through `sudo cp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SudoExecutor;

impl PrivilegedExecutor for SudoExecutor {
    fn copy(&self, source: &Path, target: &Path) -> Result<()> {
        if is_root() {
            return DirectExecutor.copy(source, target);
        }

        tracing::debug!(target_file = %target.display(), "Elevating with sudo");
        let status = Command::new("sudo")
            .arg("cp")
            .arg(source)
            .arg(target)
            .status()
            .map_err(|e| {
                tracing::warn!(error = %e, "Failed to run sudo");
                Error::Permission {
                    target: target.display().to_string(),
                    code: None,
                }
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::Permission {
                target: target.display().to_string(),
                code: status.code(),
            })
        }
    }
}

/// The only writer of the system hosts file.
#[derive(Debug)]
pub struct SystemInstaller<E> {
    target: PathBuf,
    executor: E,
}

impl<E: PrivilegedExecutor> SystemInstaller<E> {
    #[must_use]
    pub fn new(target: impl Into<PathBuf>, executor: E) -> Self {
        Self {
            target: target.into(),
            executor,
        }
    }

    #[must_use]
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Fully overwrites the target with `content`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the temporary file cannot be written, or
    /// whatever the executor returns.
    pub fn install(&self, content: &[u8]) -> Result<()> {
        let mut staged = tempfile::Builder::new()
            .prefix("workplay-")
            .suffix(".hosts")
            .tempfile()?;
        staged.write_all(content)?;
        staged.as_file().sync_all()?;

        self.executor.copy(staged.path(), &self.target)?;
        tracing::info!(
            path = %self.target.display(),
            bytes = content.len(),
            "Installed hosts file"
        );
        Ok(())
    }

    /// Puts the baseline snapshot back in place.
    ///
    /// # Errors
    ///
    /// Same as [`install`](Self::install).
    pub fn restore(&self, baseline: &[u8]) -> Result<()> {
        self.install(baseline)
    }
}
