use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Skill {
    pub id: Uuid,
    /// Free-text grouping label
    pub category: String,
    pub name: String,
    /// 0..=100
    pub level: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Education {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub score: String,
    pub completion_date: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Certificate {
    pub id: Uuid,
    pub name: String,
    pub issuer: String,
    pub date_issued: String,
    pub file_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    Cv,
    ProfilePic,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Cv => "cv",
            FileType::ProfilePic => "profile_pic",
        }
    }

    /// Human label used in dashboard messages.
    pub fn label(&self) -> &'static str {
        match self {
            FileType::Cv => "CV",
            FileType::ProfilePic => "Profile picture",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown file type: {0}")]
pub struct UnknownFileType(pub String);

impl FromStr for FileType {
    type Err = UnknownFileType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cv" => Ok(FileType::Cv),
            "profile_pic" => Ok(FileType::ProfilePic),
            other => Err(UnknownFileType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FileRecord {
    pub id: Uuid,
    pub file_type: FileType,
    pub file_name: String,
    pub file_url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Latest active row of the given type. `files` must be newest first.
pub fn latest_active(files: &[FileRecord], file_type: FileType) -> Option<&FileRecord> {
    files
        .iter()
        .find(|f| f.is_active && f.file_type == file_type)
}
