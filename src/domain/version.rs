use std::fmt;
use std::str::FromStr;

use semver::Version;

use crate::domain::prerelease;
use crate::error::{ManifestSemverError, Result};

/// Component of a version that a bump increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpPart {
    Major,
    Minor,
    Patch,
    Prerelease,
}

impl BumpPart {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpPart::Major => "major",
            BumpPart::Minor => "minor",
            BumpPart::Patch => "patch",
            BumpPart::Prerelease => "prerelease",
        }
    }
}

impl FromStr for BumpPart {
    type Err = ManifestSemverError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpPart::Major),
            "minor" => Ok(BumpPart::Minor),
            "patch" => Ok(BumpPart::Patch),
            "prerelease" => Ok(BumpPart::Prerelease),
            other => Err(ManifestSemverError::UnknownBumpPart(other.to_string())),
        }
    }
}

impl fmt::Display for BumpPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a version string (e.g., "v1.2.3-rc.1+build.5").
///
/// Surrounding whitespace and a single leading `v` are accepted; everything
/// after that must follow semantic-version grammar.
pub fn parse(raw: &str) -> Result<Version> {
    let trimmed = raw.trim();
    let core = trimmed.strip_prefix('v').unwrap_or(trimmed);

    Version::parse(core).map_err(|source| ManifestSemverError::VersionParse {
        input: raw.to_string(),
        source,
    })
}

/// Normalize a version down to `major.minor.patch[-prerelease]`.
///
/// Leading `=`/`v`/whitespace decorations are stripped and any build metadata
/// is dropped.
pub fn clean(raw: &str) -> Result<String> {
    let stripped = raw.trim_start_matches(|c: char| c == '=' || c == 'v' || c.is_whitespace());
    let mut version = parse(stripped.trim_end()).map_err(|err| match err {
        ManifestSemverError::VersionParse { source, .. } => ManifestSemverError::VersionParse {
            input: raw.to_string(),
            source,
        },
        other => other,
    })?;
    version.build = semver::BuildMetadata::EMPTY;
    Ok(format(&version))
}

/// Parse `raw`, replacing its build metadata with `build` when one is given.
///
/// A caller-supplied build is appended to the cleaned core, so it always wins
/// over whatever build metadata `raw` carried. An empty build counts as absent.
pub fn parse_with_build(raw: &str, build: Option<&str>) -> Result<Version> {
    match build.filter(|b| !b.is_empty()) {
        Some(build) => parse(&format!("{}+{}", clean(raw)?, build)),
        None => parse(raw),
    }
}

/// Render a version as `major.minor.patch[-prerelease][+build]`.
pub fn format(version: &Version) -> String {
    let mut out = format!("{}.{}.{}", version.major, version.minor, version.patch);
    if !version.pre.is_empty() {
        out.push('-');
        out.push_str(version.pre.as_str());
    }
    if !version.build.is_empty() {
        out.push('+');
        out.push_str(version.build.as_str());
    }
    out
}

/// Increment one component of `version`.
///
/// - **Major**: major += 1, minor = 0, patch = 0 (a `X.0.0-pre` just drops its prerelease)
/// - **Minor**: minor += 1, patch = 0 (a `X.Y.0-pre` just drops its prerelease)
/// - **Patch**: patch += 1 (a `X.Y.Z-pre` just drops its prerelease)
/// - **Prerelease**: advances the prerelease sequence, starting `0` on the next patch
///
/// Build metadata is carried over unchanged.
pub fn increment(version: &Version, part: BumpPart) -> Result<Version> {
    let mut next = Version::new(version.major, version.minor, version.patch);
    next.build = version.build.clone();

    let released = version.pre.is_empty();
    match part {
        BumpPart::Major => {
            if version.minor != 0 || version.patch != 0 || released {
                next.major = incremented(version.major, version)?;
            }
            next.minor = 0;
            next.patch = 0;
        }
        BumpPart::Minor => {
            if version.patch != 0 || released {
                next.minor = incremented(version.minor, version)?;
            }
            next.patch = 0;
        }
        BumpPart::Patch => {
            if released {
                next.patch = incremented(version.patch, version)?;
            }
        }
        BumpPart::Prerelease => {
            if released {
                next.patch = incremented(version.patch, version)?;
                next.pre = prerelease::initial()?;
            } else {
                next.pre = prerelease::advance(&version.pre)?;
            }
        }
    }

    Ok(next)
}

fn incremented(component: u64, version: &Version) -> Result<u64> {
    component
        .checked_add(1)
        .ok_or_else(|| ManifestSemverError::VersionOverflow {
            input: format(version),
        })
}
