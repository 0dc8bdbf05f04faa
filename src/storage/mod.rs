//! In-memory storage for the site's four collections.
//!
//! Collections are populated once from a [`SeedData`] snapshot and only read afterwards.

mod collection;
pub mod seed;

pub use collection::Collection;
pub use seed::SeedData;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::{
    Achievement, Article, ArticleCategory, CategoryFilter, Event, MemberCategory, NewAchievement,
    NewArticle, NewEvent, NewTeamMember, SearchTerm, TeamMember,
};

/// Number of records held in each collection.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCounts {
    pub team_members: usize,
    pub events: usize,
    pub articles: usize,
    pub achievements: usize,
}

/// Storage façade used by the HTTP handlers.
#[derive(Debug, Default)]
pub struct MemStorage {
    team_members: RwLock<Collection<TeamMember>>,
    events: RwLock<Collection<Event>>,
    articles: RwLock<Collection<Article>>,
    achievements: RwLock<Collection<Achievement>>,
}

impl MemStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a seed snapshot and load every record in seed order.
    pub async fn from_seed(seed: SeedData) -> Result<Self, AppError> {
        seed.validate()?;

        let storage = Self::new();
        for member in seed.team_members {
            storage.create_team_member(member).await?;
        }
        for event in seed.events {
            storage.create_event(event).await?;
        }
        for article in seed.articles {
            storage.create_article(article).await?;
        }
        for achievement in seed.achievements {
            storage.create_achievement(achievement).await?;
        }

        Ok(storage)
    }

    /// Record counts per collection.
    pub async fn counts(&self) -> CollectionCounts {
        CollectionCounts {
            team_members: self.team_members.read().await.len(),
            events: self.events.read().await.len(),
            articles: self.articles.read().await.len(),
            achievements: self.achievements.read().await.len(),
        }
    }

    // ==================== TEAM MEMBERS ====================

    /// List team members, optionally restricted to one category.
    pub async fn list_team_members(
        &self,
        category: &CategoryFilter<MemberCategory>,
    ) -> Result<Vec<TeamMember>, AppError> {
        let members = self.team_members.read().await;
        Ok(members
            .iter()
            .filter(|m| category.matches(&m.category))
            .cloned()
            .collect())
    }

    /// Get a team member by ID.
    pub async fn get_team_member(&self, id: &str) -> Result<Option<TeamMember>, AppError> {
        Ok(self.team_members.read().await.get(id).cloned())
    }

    /// Create a new team member.
    pub async fn create_team_member(&self, data: NewTeamMember) -> Result<TeamMember, AppError> {
        let mut members = self.team_members.write().await;
        Ok(members.insert_with(|id| data.into_record(id)).clone())
    }

    // ==================== EVENTS ====================

    /// List events, optionally restricted to one year.
    pub async fn list_events(&self, year: &CategoryFilter<String>) -> Result<Vec<Event>, AppError> {
        let events = self.events.read().await;
        Ok(events
            .iter()
            .filter(|e| year.matches(&e.year))
            .cloned()
            .collect())
    }

    /// Get an event by ID.
    pub async fn get_event(&self, id: &str) -> Result<Option<Event>, AppError> {
        Ok(self.events.read().await.get(id).cloned())
    }

    /// Create a new event.
    pub async fn create_event(&self, data: NewEvent) -> Result<Event, AppError> {
        let mut events = self.events.write().await;
        Ok(events.insert_with(|id| data.into_record(id)).clone())
    }

    // ==================== ARTICLES ====================

    /// List articles matching both the category filter and the search term.
    pub async fn list_articles(
        &self,
        category: &CategoryFilter<ArticleCategory>,
        search: &SearchTerm,
    ) -> Result<Vec<Article>, AppError> {
        let articles = self.articles.read().await;
        Ok(articles
            .iter()
            .filter(|a| category.matches(&a.category))
            .filter(|a| search.matches_any(&[a.title.as_str(), a.excerpt.as_str()]))
            .cloned()
            .collect())
    }

    /// Get an article by ID.
    pub async fn get_article(&self, id: &str) -> Result<Option<Article>, AppError> {
        Ok(self.articles.read().await.get(id).cloned())
    }

    /// The first featured article in insertion order.
    pub async fn featured_article(&self) -> Result<Option<Article>, AppError> {
        let articles = self.articles.read().await;
        let featured = articles.iter().find(|a| a.featured).cloned();
        Ok(featured)
    }

    /// Create a new article.
    pub async fn create_article(&self, data: NewArticle) -> Result<Article, AppError> {
        let mut articles = self.articles.write().await;
        Ok(articles.insert_with(|id| data.into_record(id)).clone())
    }

    // ==================== ACHIEVEMENTS ====================

    /// List all achievements.
    pub async fn list_achievements(&self) -> Result<Vec<Achievement>, AppError> {
        Ok(self.achievements.read().await.iter().cloned().collect())
    }

    /// Get an achievement by ID.
    pub async fn get_achievement(&self, id: &str) -> Result<Option<Achievement>, AppError> {
        Ok(self.achievements.read().await.get(id).cloned())
    }

    /// Create a new achievement.
    pub async fn create_achievement(&self, data: NewAchievement) -> Result<Achievement, AppError> {
        let mut achievements = self.achievements.write().await;
        Ok(achievements.insert_with(|id| data.into_record(id)).clone())
    }
}
