//! Source -> destination file mappings and per-file outcomes.

use std::path::{Path, PathBuf};

use crate::error::{ManifestSemverError, Result};

/// One or more source manifests and where their results are written
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FileMapping {
    pub sources: Vec<PathBuf>,
    /// When None every source is rewritten in place
    pub destination: Option<PathBuf>,
}

impl FileMapping {
    /// A single manifest rewritten in place
    pub fn in_place(path: impl Into<PathBuf>) -> Self {
        FileMapping {
            sources: vec![path.into()],
            destination: None,
        }
    }

    pub fn new(sources: Vec<PathBuf>, destination: Option<PathBuf>) -> Self {
        FileMapping {
            sources,
            destination,
        }
    }

    /// Where the result for `source` is persisted
    pub fn destination_for<'a>(&'a self, source: &'a Path) -> &'a Path {
        self.destination.as_deref().unwrap_or(source)
    }
}

/// Result of processing one item
#[derive(Debug)]
pub struct FileOutcome {
    /// None for the inline validate path
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    /// The formatted version on success
    pub result: Result<String>,
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn version(&self) -> Option<&str> {
        self.result.as_deref().ok()
    }

    pub fn error(&self) -> Option<&ManifestSemverError> {
        self.result.as_ref().err()
    }
}

/// Ordered outcomes of one operation
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }

    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Run `f` for every source of every mapping, in declared order.
///
/// `f` receives the source and its destination. A failure is recorded
/// against that file and the batch moves on.
pub fn for_each_mapping<F>(mappings: &[FileMapping], mut f: F) -> BatchReport
where
    F: FnMut(&Path, &Path) -> Result<String>,
{
    let mut report = BatchReport::default();

    for mapping in mappings {
        for source in &mapping.sources {
            let destination = mapping.destination_for(source);
            let result = f(source, destination);
            report.push(FileOutcome {
                source: Some(source.clone()),
                destination: Some(destination.to_path_buf()),
                result,
            });
        }
    }

    report
}
