//! Runs a validate / set / bump operation over a set of manifests.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::batch::{for_each_mapping, BatchReport, FileMapping, FileOutcome};
use crate::domain::version::{self, BumpPart};
use crate::domain::{Operation, OperationRequest};
use crate::error::Result;
use crate::hooks::{EventNotifier, VersionEvent};
use crate::manifest::{Manifest, DEFAULT_INDENT};

/// Options applied when persisting manifests
#[derive(Debug, Clone, PartialEq)]
pub struct WriteOptions {
    /// Indentation unit for nested JSON
    pub indent: String,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}

/// Executes operations and notifies listeners of every successful item
#[derive(Default)]
pub struct Dispatcher {
    notifier: EventNotifier,
    options: WriteOptions,
}

impl Dispatcher {
    pub fn new(notifier: EventNotifier, options: WriteOptions) -> Self {
        Dispatcher { notifier, options }
    }

    /// Resolve `request` and run it against `mappings`.
    ///
    /// Returns an error only for an unknown phase or bump part, before any
    /// file is touched. Per-file failures are recorded in the report.
    pub fn execute(&self, request: &OperationRequest, mappings: &[FileMapping]) -> Result<BatchReport> {
        let operation = request.resolve()?;
        Ok(self.run(&operation, mappings))
    }

    /// Run an already resolved operation
    pub fn run(&self, operation: &Operation, mappings: &[FileMapping]) -> BatchReport {
        debug!(?operation, indent = ?self.options.indent, "running operation");

        let report = match operation {
            Operation::Validate {
                version: Some(version),
                build,
            } => self.validate_inline(version, build.as_deref()),
            Operation::Validate {
                version: None,
                build,
            } => for_each_mapping(mappings, |src, _| self.validate_file(src, build.as_deref())),
            Operation::Set { version, build } => for_each_mapping(mappings, |src, dest| {
                self.set_file(src, dest, version.as_deref(), build.as_deref())
            }),
            Operation::Bump { part, build } => for_each_mapping(mappings, |src, dest| {
                self.bump_file(src, dest, *part, build.as_deref())
            }),
        };

        for outcome in report.failed() {
            if let Some(err) = outcome.error() {
                match &outcome.source {
                    Some(src) => warn!(path = %src.display(), error = %err, "item failed"),
                    None => warn!(error = %err, "item failed"),
                }
            }
        }

        report
    }

    /// Validate a literal version without touching any file
    fn validate_inline(&self, raw: &str, build: Option<&str>) -> BatchReport {
        let result = version::parse_with_build(raw, build).map(|v| version::format(&v));

        if let Ok(formatted) = &result {
            info!(version = %formatted, "validated");
            self.notifier.notify(&VersionEvent::Validated {
                version: formatted.clone(),
                source: None,
            });
        }

        let mut report = BatchReport::default();
        report.push(FileOutcome {
            source: None,
            destination: None,
            result,
        });
        report
    }

    fn validate_file(&self, src: &Path, build: Option<&str>) -> Result<String> {
        let manifest = Manifest::read(src)?;
        let current = manifest.version(src)?;
        debug!(path = %src.display(), version = current, "current version");

        let formatted = version::format(&version::parse_with_build(current, build)?);
        info!(path = %src.display(), version = %formatted, "validated");

        self.notifier.notify(&VersionEvent::Validated {
            version: formatted.clone(),
            source: Some(src.to_path_buf()),
        });
        Ok(formatted)
    }

    fn set_file(
        &self,
        src: &Path,
        dest: &Path,
        target: Option<&str>,
        build: Option<&str>,
    ) -> Result<String> {
        let mut manifest = Manifest::read(src)?;
        let current = manifest.version(src)?.to_string();
        match target {
            Some(target) => debug!(path = %src.display(), version = %current, "current version (but will use {} instead)", target),
            None => debug!(path = %src.display(), version = %current, "current version"),
        }

        let raw = target.unwrap_or(&current);
        let formatted = version::format(&version::parse_with_build(raw, build)?);

        manifest.set_version(formatted.as_str());
        manifest.write(dest, &self.options.indent)?;
        info!(path = %src.display(), dest = %dest.display(), version = %formatted, "set");

        self.notifier.notify(&VersionEvent::Set {
            version: formatted.clone(),
            source: src.to_path_buf(),
            destination: dest.to_path_buf(),
        });
        Ok(formatted)
    }

    fn bump_file(
        &self,
        src: &Path,
        dest: &Path,
        part: BumpPart,
        build: Option<&str>,
    ) -> Result<String> {
        let mut manifest = Manifest::read(src)?;
        let current = manifest.version(src)?;
        debug!(path = %src.display(), version = current, "current version");

        let core = version::clean(current)?;
        let parsed = version::parse_with_build(&core, build)?;
        let formatted = version::format(&version::increment(&parsed, part)?);

        manifest.set_version(formatted.as_str());
        manifest.write(dest, &self.options.indent)?;
        info!(path = %src.display(), dest = %dest.display(), %part, version = %formatted, "bumped");

        self.notifier.notify(&VersionEvent::Bumped {
            version: formatted.clone(),
            source: src.to_path_buf(),
            destination: dest.to_path_buf(),
        });
        Ok(formatted)
    }
}
