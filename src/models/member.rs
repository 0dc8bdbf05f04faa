//! Team member model matching the frontend TeamMember interface.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::require_text;
use crate::errors::AppError;

/// Roster section a member belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MemberCategory {
    Faculty,
    Student,
    Core,
}

impl MemberCategory {
    pub const ALL: [MemberCategory; 3] = [
        MemberCategory::Faculty,
        MemberCategory::Student,
        MemberCategory::Core,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberCategory::Faculty => "faculty",
            MemberCategory::Student => "student",
            MemberCategory::Core => "core",
        }
    }
}

impl FromStr for MemberCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}

/// A club member shown on the team roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub category: MemberCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    pub avatar_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Data for creating a new team member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTeamMember {
    pub name: String,
    pub role: String,
    pub category: MemberCategory,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub linked_in: Option<String>,
    pub avatar_color: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewTeamMember {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("Team member", "name", &self.name)?;
        require_text("Team member", "role", &self.role)?;
        require_text("Team member", "avatarColor", &self.avatar_color)
    }

    pub(crate) fn into_record(self, id: String) -> TeamMember {
        TeamMember {
            id,
            name: self.name,
            role: self.role,
            category: self.category,
            department: self.department,
            year: self.year,
            linked_in: self.linked_in,
            avatar_color: self.avatar_color,
            image_url: self.image_url,
        }
    }
}
