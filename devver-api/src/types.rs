//! Shared DTOs aligned with backend wire shapes.

use serde::{Deserialize, Serialize};

/// Minimal user representation used across endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLight {
    /// User id.
    pub id: String,

    /// Display name.
    pub name: Option<String>,

    /// Avatar image URL.
    pub avatar_url: Option<String>,
}

/// Machine resources assigned to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineConfiguration {
    /// CPU core count.
    pub cpu_cores: u32,

    /// RAM in GB.
    pub ram: u32,

    /// Storage in GB.
    pub storage: u32,
}

/// Project access control flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessControl {
    /// Require email authentication for access.
    pub require_email_auth: bool,

    /// Allow public access.
    pub public_access: bool,

    /// Restrict access to team members.
    pub restrict_to_team_members: bool,
}

/// A file attached to a multipart request.
///
/// The field name is fixed by the endpoint; this carries the upload itself.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// File name reported to the backend.
    pub file_name: String,

    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Upload from a name and contents.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Turn the upload into a multipart part.
    pub(crate) fn into_part(self) -> reqwest::multipart::Part {
        reqwest::multipart::Part::bytes(self.bytes).file_name(self.file_name)
    }
}
