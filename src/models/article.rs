//! Article model for the editorial feed.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::require_text;
use crate::errors::AppError;

/// Editorial section of an article.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ArticleCategory {
    Tutorials,
    Events,
    Research,
    Projects,
    Insights,
}

impl ArticleCategory {
    pub const ALL: [ArticleCategory; 5] = [
        ArticleCategory::Tutorials,
        ArticleCategory::Events,
        ArticleCategory::Research,
        ArticleCategory::Projects,
        ArticleCategory::Insights,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleCategory::Tutorials => "Tutorials",
            ArticleCategory::Events => "Events",
            ArticleCategory::Research => "Research",
            ArticleCategory::Projects => "Projects",
            ArticleCategory::Insights => "Insights",
        }
    }
}

impl FromStr for ArticleCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}

/// Serde adapter carrying the featured flag as the integers 0 and 1.
mod featured_flag {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(de::Error::custom(format!(
                "featured must be 0 or 1, got {}",
                other
            ))),
        }
    }
}

/// A post in the editorial feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: ArticleCategory,
    pub author: String,
    /// Avatar background color for the author's initials
    pub author_avatar: String,
    pub date: String,
    pub read_time: String,
    #[serde(with = "featured_flag")]
    pub featured: bool,
}

/// Data for creating a new article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    pub title: String,
    pub excerpt: String,
    pub category: ArticleCategory,
    pub author: String,
    pub author_avatar: String,
    pub date: String,
    pub read_time: String,
    #[serde(with = "featured_flag", default)]
    pub featured: bool,
}

impl NewArticle {
    pub fn validate(&self) -> Result<(), AppError> {
        require_text("Article", "title", &self.title)?;
        require_text("Article", "excerpt", &self.excerpt)?;
        require_text("Article", "author", &self.author)?;
        require_text("Article", "authorAvatar", &self.author_avatar)?;
        require_text("Article", "date", &self.date)?;
        require_text("Article", "readTime", &self.read_time)
    }

    pub(crate) fn into_record(self, id: String) -> Article {
        Article {
            id,
            title: self.title,
            excerpt: self.excerpt,
            category: self.category,
            author: self.author,
            author_avatar: self.author_avatar,
            date: self.date,
            read_time: self.read_time,
            featured: self.featured,
        }
    }
}
