//! Achievement model for the outcomes section.

use serde::{Deserialize, Serialize};

use super::require_text;
use crate::errors::AppError;

/// Icon shown next to an achievement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AchievementIcon {
    Trophy,
    Document,
    Handshake,
    Briefcase,
    Medal,
    Badge,
}

/// A club milestone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub icon: AchievementIcon,
}

/// Data for creating a new achievement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewAchievement {
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub icon: AchievementIcon,
}

impl NewAchievement {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("Achievement", "title", &self.title)?;
        require_text("Achievement", "description", &self.description)?;
        require_text("Achievement", "category", &self.category)?;
        require_text("Achievement", "date", &self.date)
    }

    pub(crate) fn into_record(self, id: String) -> Achievement {
        Achievement {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            date: self.date,
            icon: self.icon,
        }
    }
}
