//! Article API endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use super::{found, ApiQuery, ApiResult};
use crate::models::{Article, CategoryFilter, SearchTerm};
use crate::AppState;

/// Query parameters for listing articles.
#[derive(Debug, Default, Deserialize)]
pub struct ArticlesQuery {
    pub category: Option<String>,
    /// Case-insensitive substring over title and excerpt.
    pub search: Option<String>,
}

/// GET /api/articles - List articles filtered by category and search term.
///
/// Pagination is left to the client; the full filtered list is returned.
pub async fn list_articles(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ArticlesQuery>,
) -> ApiResult<Vec<Article>> {
    let category = CategoryFilter::parse(params.category.as_deref());
    let search = SearchTerm::new(params.search.as_deref());

    let articles = state
        .store
        .list_articles(&category, &search)
        .await
        .map_err(|e| e.or_fetch_failure("articles"))?;

    Ok(Json(articles))
}

/// GET /api/articles/featured - Get the featured article.
pub async fn get_featured_article(State(state): State<AppState>) -> ApiResult<Article> {
    let article = state
        .store
        .featured_article()
        .await
        .map_err(|e| e.or_fetch_failure("featured article"))?;

    found(article, "No featured article")
}

/// GET /api/articles/:id - Get a single article.
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Article> {
    let article = state
        .store
        .get_article(&id)
        .await
        .map_err(|e| e.or_fetch_failure("article"))?;

    found(article, "Article not found")
}
