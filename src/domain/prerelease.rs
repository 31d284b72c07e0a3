//! Pre-release sequence handling for version bumps
//!
//! A prerelease advances by incrementing its right-most numeric identifier
//! ("rc.1" -> "rc.2"). When no identifier is numeric a `0` is appended
//! ("alpha" -> "alpha.0"). A fresh prerelease starts at "0".

use semver::Prerelease;

use crate::error::{ManifestSemverError, Result};

/// The prerelease a released version gets on its first prerelease bump
pub fn initial() -> Result<Prerelease> {
    build("0")
}

/// Advance an existing prerelease sequence
///
/// # Examples
/// ```ignore
/// let next = advance(&Prerelease::new("beta.1")?)?;
/// assert_eq!(next.as_str(), "beta.2");
/// ```
pub fn advance(current: &Prerelease) -> Result<Prerelease> {
    if current.is_empty() {
        return initial();
    }

    let mut identifiers: Vec<String> = current.as_str().split('.').map(str::to_string).collect();

    match identifiers.iter().rposition(|id| is_numeric(id)) {
        Some(idx) => {
            let next = identifiers[idx]
                .parse::<u64>()
                .ok()
                .and_then(|n| n.checked_add(1))
                .ok_or_else(|| ManifestSemverError::VersionOverflow {
                    input: current.to_string(),
                })?;
            identifiers[idx] = next.to_string();
        }
        None => identifiers.push("0".to_string()),
    }

    build(&identifiers.join("."))
}

fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.chars().all(|c| c.is_ascii_digit())
}

fn build(text: &str) -> Result<Prerelease> {
    Prerelease::new(text).map_err(|source| ManifestSemverError::VersionParse {
        input: text.to_string(),
        source,
    })
}
