use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{ManifestSemverError, Result};
use crate::hooks::{EventKind, EventListener, VersionEvent};

/// Runs an external script whenever an event of a given kind fires
pub struct HookScriptListener {
    kind: EventKind,
    script: PathBuf,
}

impl HookScriptListener {
    pub fn new(kind: EventKind, script: impl Into<PathBuf>) -> Self {
        HookScriptListener {
            kind,
            script: script.into(),
        }
    }

    /// Execute a hook script with the event payload
    ///
    /// The script is executed with SEMVER_* environment variables set from the
    /// event. Any non-zero exit code is treated as a failure.
    pub fn execute(script_path: &Path, event: &VersionEvent) -> Result<()> {
        if !script_path.exists() {
            return Err(ManifestSemverError::hook(format!(
                "Hook script not found: {}",
                script_path.display()
            )));
        }

        if !script_path.is_file() {
            return Err(ManifestSemverError::hook(format!(
                "Hook path is not a file: {}",
                script_path.display()
            )));
        }

        let mut cmd = Command::new(script_path);
        cmd.envs(event.to_env_vars());

        let output = cmd.output().map_err(|e| {
            ManifestSemverError::hook(format!(
                "Failed to execute hook {}: {}",
                script_path.display(),
                e
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ManifestSemverError::hook(format!(
                "Hook {} failed with exit code {}\nStderr: {}",
                script_path.display(),
                output.status.code().unwrap_or(-1),
                stderr
            )));
        }

        debug!(script = %script_path.display(), event = event.name(), "hook executed");
        Ok(())
    }
}

impl EventListener for HookScriptListener {
    fn on_event(&self, event: &VersionEvent) -> Result<()> {
        if event.kind() != self.kind {
            return Ok(());
        }
        Self::execute(&self.script, event)
    }
}
