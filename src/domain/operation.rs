use std::fmt;
use std::str::FromStr;

use crate::domain::version::BumpPart;
use crate::error::{ManifestSemverError, Result};

/// Phase of a versioning run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Validate,
    Set,
    Bump,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Validate => "validate",
            Phase::Set => "set",
            Phase::Bump => "bump",
        }
    }
}

impl FromStr for Phase {
    type Err = ManifestSemverError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "validate" => Ok(Phase::Validate),
            "set" => Ok(Phase::Set),
            "bump" => Ok(Phase::Bump),
            other => Err(ManifestSemverError::UnknownPhase(other.to_string())),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unresolved request as a caller hands it over: every argument is a
/// literal string that still has to be checked.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OperationRequest {
    /// "validate", "set" or "bump"
    pub phase: String,
    /// Literal version for validate/set, part name for bump
    pub target: Option<String>,
    /// Build metadata to attach
    pub build: Option<String>,
}

impl OperationRequest {
    pub fn new(phase: impl Into<String>) -> Self {
        OperationRequest {
            phase: phase.into(),
            ..Default::default()
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_build(mut self, build: impl Into<String>) -> Self {
        self.build = Some(build.into());
        self
    }

    /// Check phase and bump part, producing a runnable operation.
    ///
    /// Fails with `UnknownPhase` or `UnknownBumpPart`; both must surface
    /// before any file is read.
    pub fn resolve(&self) -> Result<Operation> {
        let target = self.target.clone().filter(|t| !t.is_empty());
        let build = self.build.clone().filter(|b| !b.is_empty());

        match self.phase.parse::<Phase>()? {
            Phase::Validate => Ok(Operation::Validate {
                version: target,
                build,
            }),
            Phase::Set => Ok(Operation::Set {
                version: target,
                build,
            }),
            Phase::Bump => {
                let part = target.as_deref().unwrap_or_default().parse::<BumpPart>()?;
                Ok(Operation::Bump { part, build })
            }
        }
    }
}

/// A checked operation, one variant per phase
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Validate a literal version, or every manifest when `version` is None
    Validate {
        version: Option<String>,
        build: Option<String>,
    },
    /// Overwrite manifest versions with `version`, or re-normalize the
    /// existing value when None
    Set {
        version: Option<String>,
        build: Option<String>,
    },
    /// Increment `part` of every manifest version
    Bump {
        part: BumpPart,
        build: Option<String>,
    },
}

impl Operation {
    pub fn phase(&self) -> Phase {
        match self {
            Operation::Validate { .. } => Phase::Validate,
            Operation::Set { .. } => Phase::Set,
            Operation::Bump { .. } => Phase::Bump,
        }
    }
}
