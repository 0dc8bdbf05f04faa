//! Integration tests for the AI Club backend.

use std::collections::HashSet;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use reqwest::Client;
use serde_json::Value;
use tower::ServiceExt;

use crate::config::{Config, LogFormat};
use crate::storage::{seed, MemStorage};
use crate::{create_router, AppState};

async fn test_state() -> AppState {
    let store = MemStorage::from_seed(seed::builtin())
        .await
        .expect("Failed to seed storage");

    let config = Config {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        log_level: "warn".to_string(),
        log_format: LogFormat::Text,
        seed_path: None,
        cors_origin: None,
    };

    AppState {
        store: Arc::new(store),
        config: Arc::new(config),
    }
}

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
}

impl TestFixture {
    async fn new() -> Self {
        let app = create_router(test_state().await);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestFixture {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> (u16, Value) {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    async fn get_list(&self, path: &str) -> Vec<Value> {
        let (status, body) = self.get_json(path).await;
        assert_eq!(status, 200, "GET {} failed: {}", path, body);
        body.as_array().expect("expected a JSON array").clone()
    }
}

fn ids(records: &[Value]) -> HashSet<String> {
    records
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture.get_json("/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["counts"]["teamMembers"], 13);
    assert_eq!(body["counts"]["articles"], 9);
}

#[tokio::test]
async fn test_team_list_and_categories() {
    let fixture = TestFixture::new().await;

    let all = fixture.get_list("/api/team").await;
    let faculty = fixture.get_list("/api/team?category=faculty").await;
    let students = fixture.get_list("/api/team?category=student").await;
    let core = fixture.get_list("/api/team?category=core").await;

    assert_eq!(all.len(), 13);
    assert_eq!(faculty.len(), 2);
    assert_eq!(students.len(), 5);
    assert_eq!(core.len(), 6);
    assert!(core.iter().all(|m| m["category"] == "core"));

    let faculty_ids = ids(&faculty);
    let student_ids = ids(&students);
    let core_ids = ids(&core);
    assert!(faculty_ids.is_disjoint(&student_ids));
    assert!(faculty_ids.is_disjoint(&core_ids));
    assert!(student_ids.is_disjoint(&core_ids));

    let union: HashSet<String> = faculty_ids
        .union(&student_ids)
        .cloned()
        .chain(core_ids)
        .collect();
    assert_eq!(union, ids(&all));
}

#[tokio::test]
async fn test_team_sentinel_and_unmatched_category() {
    let fixture = TestFixture::new().await;

    assert_eq!(fixture.get_list("/api/team?category=all").await.len(), 13);

    assert!(fixture.get_list("/api/team?category=alumni").await.is_empty());
    assert!(fixture.get_list("/api/team?category=Faculty").await.is_empty());
}

#[tokio::test]
async fn test_malformed_query_returns_json_error() {
    let fixture = TestFixture::new().await;

    let (status, body) = fixture
        .get_json("/api/team?category=core&category=student")
        .await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["error"].is_string());

    let (status, body) = fixture.get_json("/api/events?year=2024&year=2025").await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_team_member_by_id() {
    let fixture = TestFixture::new().await;

    let all = fixture.get_list("/api/team").await;
    let first = &all[0];
    let id = first["id"].as_str().unwrap();

    let (status, body) = fixture.get_json(&format!("/api/team/{}", id)).await;
    assert_eq!(status, 200);
    assert_eq!(&body, first);
    assert_eq!(body["name"], "Dr. Rajesh Kumar");
    assert_eq!(body["avatarColor"], "#0891b2");
    assert!(body.get("year").is_none());

    let (status, body) = fixture.get_json("/api/team/not-a-real-id").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Team member not found");
}

#[tokio::test]
async fn test_events_year_filter() {
    let fixture = TestFixture::new().await;

    let all = fixture.get_list("/api/events").await;
    let sentinel = fixture.get_list("/api/events?year=All").await;
    assert_eq!(all.len(), 12);
    assert_eq!(all, sentinel);

    let in_2025 = fixture.get_list("/api/events?year=2025").await;
    assert_eq!(in_2025.len(), 4);
    assert!(in_2025.iter().all(|e| e["year"] == "2025"));

    assert!(fixture.get_list("/api/events?year=2019").await.is_empty());
}

#[tokio::test]
async fn test_event_by_id() {
    let fixture = TestFixture::new().await;

    let all = fixture.get_list("/api/events").await;
    let id = all[1]["id"].as_str().unwrap();

    let (status, body) = fixture.get_json(&format!("/api/events/{}", id)).await;
    assert_eq!(status, 200);
    assert_eq!(body["title"], "Smart India Hackathon 2025");
    assert_eq!(body["tags"].as_array().unwrap().len(), 3);

    let (status, body) = fixture.get_json("/api/events/missing").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Event not found");
}

#[tokio::test]
async fn test_articles_filters() {
    let fixture = TestFixture::new().await;

    let all = fixture.get_list("/api/articles").await;
    assert_eq!(all.len(), 9);
    assert_eq!(fixture.get_list("/api/articles?category=All").await, all);
    assert_eq!(fixture.get_list("/api/articles?search=").await, all);

    let insights = fixture.get_list("/api/articles?category=Insights").await;
    assert_eq!(insights.len(), 2);

    let hits = fixture.get_list("/api/articles?search=TRANSFORMER").await;
    assert!(!hits.is_empty());
    for article in &hits {
        let text = format!(
            "{} {}",
            article["title"].as_str().unwrap(),
            article["excerpt"].as_str().unwrap()
        )
        .to_lowercase();
        assert!(text.contains("transformer"));
    }

    let both = fixture
        .get_list("/api/articles?category=Research&search=transformer")
        .await;
    assert_eq!(both.len(), 1);
    assert_eq!(both[0]["category"], "Research");

    assert!(fixture
        .get_list("/api/articles?category=Gossip")
        .await
        .is_empty());
    assert!(fixture
        .get_list("/api/articles?category=tutorials")
        .await
        .is_empty());
    assert_eq!(
        fixture
            .get_list("/api/articles?category=Tutorials")
            .await
            .len(),
        3
    );
}

#[tokio::test]
async fn test_featured_article() {
    let fixture = TestFixture::new().await;

    let all = fixture.get_list("/api/articles").await;
    let featured: Vec<&Value> = all.iter().filter(|a| a["featured"] == 1).collect();
    assert_eq!(featured.len(), 1);
    assert!(all
        .iter()
        .all(|a| a["featured"] == 0 || a["featured"] == 1));

    let (status, body) = fixture.get_json("/api/articles/featured").await;
    assert_eq!(status, 200);
    assert_eq!(&body, featured[0]);

    let id = featured[0]["id"].as_str().unwrap();
    let (status, body) = fixture.get_json(&format!("/api/articles/{}", id)).await;
    assert_eq!(status, 200);
    assert_eq!(body["readTime"], "8 min read");
}

#[tokio::test]
async fn test_achievements() {
    let fixture = TestFixture::new().await;

    let all = fixture.get_list("/api/achievements").await;
    assert_eq!(all.len(), 6);
    assert_eq!(all[0]["icon"], "trophy");

    let id = all[4]["id"].as_str().unwrap();
    let (status, body) = fixture
        .get_json(&format!("/api/achievements/{}", id))
        .await;
    assert_eq!(status, 200);
    assert_eq!(body["title"], "Best Student Chapter Award");

    let (status, body) = fixture.get_json("/api/achievements/missing").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Achievement not found");
}

#[tokio::test]
async fn test_no_write_endpoints() {
    let app = create_router(test_state().await);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/team")
                .header("content-type", "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_created_record_is_served() {
    let state = test_state().await;
    let created = state
        .store
        .create_article(crate::models::NewArticle {
            title: "Reinforcement Learning Primer".into(),
            excerpt: "Rewards, policies and value functions.".into(),
            category: crate::models::ArticleCategory::Tutorials,
            author: "Rahul Iyer".into(),
            author_avatar: "#06b6d4".into(),
            date: "Apr 2, 2025".into(),
            read_time: "11 min read".into(),
            featured: false,
        })
        .await
        .unwrap();

    let app = create_router(state);
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/articles/{}", created.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["title"], "Reinforcement Learning Primer");
    assert_eq!(body["featured"], 0);
}
