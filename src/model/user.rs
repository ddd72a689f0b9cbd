use std::fmt;

use serde::{Deserialize, Serialize};

/// Role assigned to an account by the authentication service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Housing,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Housing => "housing",
            Self::Admin => "admin",
        }
    }

    /// Path of the dashboard this role is allowed to view.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Self::Student => "/dashboard/student",
            Self::Housing => "/dashboard/housing",
            Self::Admin => "/dashboard/admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cached copy of the signed-in user, as persisted by the authentication service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
}
