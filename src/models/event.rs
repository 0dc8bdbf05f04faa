//! Event model for the activity timeline.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::require_text;
use crate::errors::AppError;

/// Kind of club activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Workshop,
    Hackathon,
    Seminar,
    Project,
    Event,
    Competition,
}

impl EventCategory {
    pub const ALL: [EventCategory; 6] = [
        EventCategory::Workshop,
        EventCategory::Hackathon,
        EventCategory::Seminar,
        EventCategory::Project,
        EventCategory::Event,
        EventCategory::Competition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Workshop => "Workshop",
            EventCategory::Hackathon => "Hackathon",
            EventCategory::Seminar => "Seminar",
            EventCategory::Project => "Project",
            EventCategory::Event => "Event",
            EventCategory::Competition => "Competition",
        }
    }
}

impl FromStr for EventCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}

fn default_images() -> u32 {
    3
}

/// A past club activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    /// Short display date, e.g. "Jan 15"
    pub date: String,
    pub month: String,
    pub year: String,
    pub participants: u32,
    pub tags: Vec<String>,
    /// Number of gallery images
    pub images: u32,
}

/// Data for creating a new event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    pub date: String,
    pub month: String,
    pub year: String,
    pub participants: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_images")]
    pub images: u32,
}

impl NewEvent {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("Event", "title", &self.title)?;
        require_text("Event", "description", &self.description)?;
        require_text("Event", "date", &self.date)?;
        require_text("Event", "month", &self.month)?;
        require_text("Event", "year", &self.year)
    }

    pub(crate) fn into_record(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            date: self.date,
            month: self.month,
            year: self.year,
            participants: self.participants,
            tags: self.tags,
            images: self.images,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_defaults_to_three() {
        let event: NewEvent = serde_json::from_value(serde_json::json!({
            "title": "Club Inauguration",
            "description": "Grand launch",
            "category": "Event",
            "date": "Jul 1",
            "month": "July",
            "year": "2023",
            "participants": 150,
            "tags": ["Launch"]
        }))
        .unwrap();
        assert_eq!(event.images, 3);
        assert_eq!(event.category, EventCategory::Event);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let result: Result<NewEvent, _> = serde_json::from_value(serde_json::json!({
            "title": "Mixer",
            "description": "Social",
            "category": "Party",
            "date": "Jul 1",
            "month": "July",
            "year": "2023",
            "participants": 10
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_participants_rejected() {
        let result: Result<NewEvent, _> = serde_json::from_value(serde_json::json!({
            "title": "Mixer",
            "description": "Social",
            "category": "Event",
            "date": "Jul 1",
            "month": "July",
            "year": "2023",
            "participants": -5
        }));
        assert!(result.is_err());
    }
}
