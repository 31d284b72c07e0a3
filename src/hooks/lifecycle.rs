use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Kinds of events fired after a successful operation on one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Validate,
    Set,
    Bump,
}

impl EventKind {
    /// Get the event name as a string
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Validate => "semver.validate",
            EventKind::Set => "semver.set",
            EventKind::Bump => "semver.bump",
        }
    }
}

/// Payload of a fired event
#[derive(Debug, Clone, PartialEq)]
pub enum VersionEvent {
    /// A version passed validation; `source` is None for an inline version
    Validated {
        version: String,
        source: Option<PathBuf>,
    },
    /// A version was written to `destination`
    Set {
        version: String,
        source: PathBuf,
        destination: PathBuf,
    },
    /// A bumped version was written to `destination`
    Bumped {
        version: String,
        source: PathBuf,
        destination: PathBuf,
    },
}

impl VersionEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            VersionEvent::Validated { .. } => EventKind::Validate,
            VersionEvent::Set { .. } => EventKind::Set,
            VersionEvent::Bumped { .. } => EventKind::Bump,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// The formatted version the event carries
    pub fn version(&self) -> &str {
        match self {
            VersionEvent::Validated { version, .. }
            | VersionEvent::Set { version, .. }
            | VersionEvent::Bumped { version, .. } => version,
        }
    }

    /// Convert the event to environment variables for a hook script
    ///
    /// Maps payload fields to SEMVER_* environment variables
    pub fn to_env_vars(&self) -> HashMap<String, String> {
        let mut env = HashMap::new();

        env.insert("SEMVER_EVENT".to_string(), self.name().to_string());
        env.insert("SEMVER_VERSION".to_string(), self.version().to_string());

        match self {
            VersionEvent::Validated { source, .. } => {
                if let Some(source) = source {
                    env.insert("SEMVER_SOURCE".to_string(), source.display().to_string());
                }
            }
            VersionEvent::Set {
                source,
                destination,
                ..
            }
            | VersionEvent::Bumped {
                source,
                destination,
                ..
            } => {
                env.insert("SEMVER_SOURCE".to_string(), source.display().to_string());
                env.insert("SEMVER_DEST".to_string(), destination.display().to_string());
            }
        }

        env
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(EventKind::Validate.name(), "semver.validate");
        assert_eq!(EventKind::Set.name(), "semver.set");
        assert_eq!(EventKind::Bump.name(), "semver.bump");
    }

    #[test]
    fn test_bumped_event_env_vars() {
        let event = VersionEvent::Bumped {
            version: "1.3.0".to_string(),
            source: PathBuf::from("package.json"),
            destination: PathBuf::from("dist/package.json"),
        };

        let env = event.to_env_vars();
        assert_eq!(env.get("SEMVER_EVENT"), Some(&"semver.bump".to_string()));
        assert_eq!(env.get("SEMVER_VERSION"), Some(&"1.3.0".to_string()));
        assert_eq!(env.get("SEMVER_SOURCE"), Some(&"package.json".to_string()));
        assert_eq!(
            env.get("SEMVER_DEST"),
            Some(&"dist/package.json".to_string())
        );
    }

    #[test]
    fn test_inline_validated_event_env_vars() {
        let event = VersionEvent::Validated {
            version: "1.0.0".to_string(),
            source: None,
        };

        let env = event.to_env_vars();
        assert_eq!(env.len(), 2);
        assert!(env.get("SEMVER_SOURCE").is_none());
        assert!(env.get("SEMVER_DEST").is_none());
    }

    #[test]
    fn test_event_kind_and_version() {
        let event = VersionEvent::Set {
            version: "3.0.0".to_string(),
            source: PathBuf::from("a.json"),
            destination: PathBuf::from("a.json"),
        };
        assert_eq!(event.kind(), EventKind::Set);
        assert_eq!(event.version(), "3.0.0");
    }
}
