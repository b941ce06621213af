//! Ignition config document (v3.2 subset).
//!
//! Only the fields this crate populates are modelled. Optional fields are
//! skipped when unset so the JSON stays close to what Ignition itself emits.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::files::FileRecord;
use crate::units::UnitRecord;

/// Highest config version the v3.2 schema accepts.
pub const IGNITION_VERSION: &str = "3.2.0";

/// Root of an Ignition config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub ignition: Ignition,
    #[serde(default)]
    pub passwd: Passwd,
    #[serde(default)]
    pub storage: Storage,
    #[serde(default)]
    pub systemd: Systemd,
}

impl Config {
    /// An empty config stamped with [`IGNITION_VERSION`].
    pub fn new() -> Self {
        Self {
            ignition: Ignition {
                version: IGNITION_VERSION.to_string(),
            },
            passwd: Passwd::default(),
            storage: Storage::default(),
            systemd: Systemd::default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ignition {
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Passwd {
    #[serde(default)]
    pub users: Vec<PasswdUser>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswdUser {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_authorized_keys: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    #[serde(default)]
    pub files: Vec<File>,
}

/// A file written to the target machine before boot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    /// Permission bits; JSON carries them as a decimal integer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<u32>,
    #[serde(default)]
    pub contents: Resource,
}

/// Where file contents come from. Always an inline data URL here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Systemd {
    #[serde(default)]
    pub units: Vec<Unit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
}

impl From<FileRecord> for File {
    fn from(record: FileRecord) -> Self {
        Self {
            path: record.path,
            overwrite: Some(true),
            mode: Some(record.mode),
            contents: Resource {
                source: Some(encode_data_url(&record.content)),
            },
        }
    }
}

impl From<UnitRecord> for Unit {
    fn from(record: UnitRecord) -> Self {
        Self {
            name: record.name,
            enabled: Some(record.enabled),
            contents: Some(record.content),
        }
    }
}

/// Encode bytes as a base64 data URL.
///
/// UTF-8 text without NUL bytes is tagged `text/plain;charset=utf-8`,
/// anything else `application/octet-stream`.
pub fn encode_data_url(data: &[u8]) -> String {
    let media_type = if !data.contains(&0) && std::str::from_utf8(data).is_ok() {
        "text/plain;charset=utf-8"
    } else {
        "application/octet-stream"
    };
    format!("data:{};base64,{}", media_type, STANDARD.encode(data))
}

/// Decode a base64 data URL produced by [`encode_data_url`].
///
/// Returns `None` for anything that is not a well-formed base64 data URL.
pub fn decode_data_url(url: &str) -> Option<Vec<u8>> {
    let rest = url.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    if !header.ends_with(";base64") {
        return None;
    }
    STANDARD.decode(payload).ok()
}
