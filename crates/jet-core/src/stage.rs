//! External stage invocation.
//!
//! A stage is an opaque executable called with a single runconfig path. It
//! blocks until the downstream processing has fully exited and reports a
//! small vocabulary of exit codes: 0 on the success path, a recognized
//! domain code otherwise (e.g. input disqualified by cloud cover). The
//! trait is the seam that lets orchestration tests run without any real
//! science code installed.

use crate::error::{JetError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::info;

pub trait ProcessingStage {
    fn name(&self) -> &str;

    /// Run the stage to completion and return its exit code.
    ///
    /// A nonzero code is NOT an error here; it is a recognized domain exit
    /// condition for the driver to classify. Errors are reserved for the
    /// stage failing to run at all.
    fn run(&self, runconfig: &Path) -> Result<i32>;
}

// ---------------------------------------------------------------------------
// CommandStage
// ---------------------------------------------------------------------------

/// A stage backed by an executable on disk, invoked as
/// `<program> <runconfig>` with stderr flowing through to the terminal so
/// stage log lines appear in the batch log.
pub struct CommandStage {
    name: String,
    program: PathBuf,
}

impl CommandStage {
    pub fn new(name: impl Into<String>, program: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
        }
    }
}

impl ProcessingStage for CommandStage {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, runconfig: &Path) -> Result<i32> {
        info!("invoking {} with runconfig {}", self.name, runconfig.display());

        let status = Command::new(&self.program)
            .arg(runconfig)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| JetError::StageSpawn {
                stage: self.name.clone(),
                reason: e.to_string(),
            })?;

        status.code().ok_or_else(|| JetError::StageInterrupted {
            stage: self.name.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
