//! JSON manifests holding a `version` field.
//!
//! Key order is preserved on the way in and out, so a rewrite only changes
//! the `version` value and the whitespace.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::error::{ManifestSemverError, Result};

const VERSION_KEY: &str = "version";

/// Default indentation unit for persisted manifests
pub const DEFAULT_INDENT: &str = "\t";

/// A manifest loaded from disk
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    fields: Map<String, Value>,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    ///
    /// Missing files, unparsable JSON and non-object documents all fail with
    /// `ManifestRead`.
    pub fn read(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| ManifestSemverError::manifest_read(path, e))?;
        Self::from_json(&content).map_err(|reason| ManifestSemverError::manifest_read(path, reason))
    }

    fn from_json(content: &str) -> std::result::Result<Self, String> {
        match serde_json::from_str::<Value>(content).map_err(|e| e.to_string())? {
            Value::Object(fields) => Ok(Manifest { fields }),
            _ => Err("manifest root is not an object".to_string()),
        }
    }

    /// The `version` field, which must be a string
    pub fn version(&self, path: &Path) -> Result<&str> {
        self.fields
            .get(VERSION_KEY)
            .and_then(Value::as_str)
            .ok_or_else(|| ManifestSemverError::MissingVersionField {
                path: path.to_path_buf(),
            })
    }

    /// Replace the `version` field in place, keeping its position
    pub fn set_version(&mut self, version: impl Into<String>) {
        self.fields
            .insert(VERSION_KEY.to_string(), Value::String(version.into()));
    }

    fn serialize_into<W: Write>(&self, writer: W, indent: &str) -> io::Result<()> {
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
        self.fields.serialize(&mut ser).map_err(io::Error::from)
    }

    /// Serialize with `indent` as the nesting unit
    pub fn to_pretty_string(&self, indent: &str) -> Result<String> {
        let mut buf = Vec::new();
        self.serialize_into(&mut buf, indent)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }

    /// Persist to `dest`, creating parent directories as needed.
    ///
    /// Every failure, serialization included, is a `ManifestWrite` naming `dest`.
    pub fn write(&self, dest: &Path, indent: &str) -> Result<()> {
        self.write_to(dest, indent)
            .map_err(|source| ManifestSemverError::ManifestWrite {
                path: dest.to_path_buf(),
                source,
            })
    }

    fn write_to(&self, dest: &Path, indent: &str) -> io::Result<()> {
        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(dest)?);
        self.serialize_into(&mut writer, indent)?;
        writer.flush()
    }
}
