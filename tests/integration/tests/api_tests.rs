//! API Integration Tests
//!
//! Most tests run against the in-memory store and need no external
//! services. The PostgreSQL tests are skipped unless DATABASE_URL is set.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, fixtures::*, postgres_test_config, test_config, TestServer,
};
use reqwest::StatusCode;

const THUMBS: &str = "👍";
const HEART: &str = "❤️";
const FIRE: &str = "🔥";

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["status"], "ready");
    assert_eq!(body["storage"], "healthy");
}

// ============================================================================
// Count Tests
// ============================================================================

#[tokio::test]
async fn test_unknown_post_is_zero_filled() {
    let server = TestServer::start().await.unwrap();
    let response = server.get(&reactions_path("never-seen")).await.unwrap();
    let body: CountsResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.counts.len(), ALLOWED_EMOJIS.len());
    for emoji in ALLOWED_EMOJIS {
        assert_eq!(body.counts.get(emoji), Some(&0), "missing {emoji}");
    }
}

#[tokio::test]
async fn test_counts_keep_display_order() {
    let server = TestServer::start().await.unwrap();
    let response = server.get(&reactions_path(&unique_post_id())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Keys appear in display order in the raw body
    let text = response.text().await.unwrap();
    let positions: Vec<usize> = ALLOWED_EMOJIS
        .iter()
        .map(|emoji| text.find(emoji).expect("emoji key present"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "order in {text}");
}

// ============================================================================
// Update Tests
// ============================================================================

#[tokio::test]
async fn test_set_reaction() {
    let server = TestServer::start().await.unwrap();
    let path = reactions_path(&unique_post_id());

    let response = server
        .post(&path, &UpdateReactionRequest::new("u1", THUMBS))
        .await
        .unwrap();
    let body: UpdateReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.user_reaction.as_deref(), Some(THUMBS));
    assert_eq!(body.counts[THUMBS], 1);
    assert_eq!(total(&body.counts), 1);

    // GET agrees with the POST result
    let response = server.get(&path).await.unwrap();
    let counts: CountsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(counts.counts, body.counts);
}

#[tokio::test]
async fn test_same_emoji_toggles_off() {
    let server = TestServer::start().await.unwrap();
    let path = reactions_path(&unique_post_id());

    server
        .post(&path, &UpdateReactionRequest::new("u1", THUMBS))
        .await
        .unwrap();
    let response = server
        .post(&path, &UpdateReactionRequest::new("u1", THUMBS))
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body["user_reaction"].is_null());
    assert_eq!(body["counts"][THUMBS], 0);
}

#[tokio::test]
async fn test_replace_reaction() {
    let server = TestServer::start().await.unwrap();
    let path = reactions_path(&unique_post_id());

    server
        .post(&path, &UpdateReactionRequest::new("u2", HEART))
        .await
        .unwrap();
    server
        .post(&path, &UpdateReactionRequest::new("u1", THUMBS))
        .await
        .unwrap();

    let response = server
        .post(&path, &UpdateReactionRequest::new("u1", FIRE))
        .await
        .unwrap();
    let body: UpdateReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.user_reaction.as_deref(), Some(FIRE));
    assert_eq!(body.counts[THUMBS], 0);
    assert_eq!(body.counts[FIRE], 1);
    assert_eq!(body.counts[HEART], 1);
    assert_eq!(total(&body.counts), 2);
}

#[tokio::test]
async fn test_empty_emoji_removes_reaction() {
    let server = TestServer::start().await.unwrap();
    let path = reactions_path(&unique_post_id());

    server
        .post(&path, &UpdateReactionRequest::new("u1", FIRE))
        .await
        .unwrap();
    let response = server
        .post(&path, &UpdateReactionRequest::clear("u1"))
        .await
        .unwrap();
    let body: UpdateReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.user_reaction, None);
    assert_eq!(total(&body.counts), 0);

    // Clearing again is a no-op, not an error
    let response = server
        .post(&path, &UpdateReactionRequest::clear("u1"))
        .await
        .unwrap();
    let body: UpdateReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.user_reaction, None);
}

#[tokio::test]
async fn test_unknown_emoji_is_stored_but_not_counted() {
    let server = TestServer::start().await.unwrap();
    let path = reactions_path(&unique_post_id());

    let response = server
        .post(&path, &UpdateReactionRequest::new("u1", "🦀"))
        .await
        .unwrap();
    let body: UpdateReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.user_reaction.as_deref(), Some("🦀"));
    assert!(!body.counts.contains_key("🦀"));
    assert_eq!(total(&body.counts), 0);
}

#[tokio::test]
async fn test_strict_policy_rejects_unknown_emoji() {
    let config = test_config(&[("EMOJI_POLICY", "strict")]).unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();
    let path = reactions_path(&unique_post_id());

    let response = server
        .post(&path, &UpdateReactionRequest::new("u1", "🦀"))
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_EMOJI");

    let response = server.get(&path).await.unwrap();
    let counts: CountsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(total(&counts.counts), 0);
}

#[tokio::test]
async fn test_users_and_posts_are_independent() {
    let server = TestServer::start().await.unwrap();
    let post_a = reactions_path(&unique_post_id());
    let post_b = reactions_path(&unique_post_id());

    server
        .post(&post_a, &UpdateReactionRequest::new("u1", THUMBS))
        .await
        .unwrap();
    let response = server
        .post(&post_a, &UpdateReactionRequest::new("u2", THUMBS))
        .await
        .unwrap();
    let body: UpdateReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.counts[THUMBS], 2);
    assert_eq!(body.user_reaction.as_deref(), Some(THUMBS));

    let response = server.get(&post_b).await.unwrap();
    let counts: CountsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(total(&counts.counts), 0);
}

#[tokio::test]
async fn test_concurrent_users_are_all_counted() {
    let server = TestServer::start().await.unwrap();
    let url = format!("{}{}", server.base_url(), reactions_path(&unique_post_id()));

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..20 {
        let client = server.client.clone();
        let url = url.clone();
        let body = UpdateReactionRequest::new(format!("user-{i}"), ALLOWED_EMOJIS[i % 5]);
        tasks.spawn(async move { client.post(&url).json(&body).send().await });
    }
    while let Some(result) = tasks.join_next().await {
        let response = result.unwrap().unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server.client.get(&url).send().await.unwrap();
    let counts: CountsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(total(&counts.counts), 20);
    for emoji in ALLOWED_EMOJIS {
        assert_eq!(counts.counts[emoji], 4);
    }
}

// ============================================================================
// Error Tests
// ============================================================================

#[tokio::test]
async fn test_missing_emoji_field() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post(
            &reactions_path("p1"),
            &serde_json::json!({"user_id": "u1"}),
        )
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(body.error.code, "INVALID_BODY");
    assert!(body.error.message.contains("emoji"));
}

#[tokio::test]
async fn test_empty_user_id_is_accepted() {
    let server = TestServer::start().await.unwrap();
    let path = reactions_path(&unique_post_id());

    let response = server
        .post(&path, &UpdateReactionRequest::new("", HEART))
        .await
        .unwrap();
    let body: UpdateReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.user_reaction.as_deref(), Some(HEART));
    assert_eq!(body.counts[HEART], 1);
}

#[tokio::test]
async fn test_malformed_json() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .post_raw(&reactions_path("p1"), "application/json", "{not json")
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_cors_headers_on_simple_request() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .client
        .get(format!("{}{}", server.base_url(), reactions_path("p1")))
        .header("Origin", "http://localhost:3000")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}

// ============================================================================
// PostgreSQL Tests
// ============================================================================

#[tokio::test]
async fn test_postgres_toggle_flow() {
    let Some(config) = postgres_test_config() else {
        return;
    };

    let server = TestServer::start_with_config(config).await.expect("Failed to start server");
    let path = reactions_path(&unique_post_id());

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .post(&path, &UpdateReactionRequest::new("u1", HEART))
        .await
        .unwrap();
    let body: UpdateReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.counts[HEART], 1);

    let response = server
        .post(&path, &UpdateReactionRequest::new("u1", FIRE))
        .await
        .unwrap();
    let body: UpdateReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.counts[HEART], 0);
    assert_eq!(body.counts[FIRE], 1);

    let response = server
        .post(&path, &UpdateReactionRequest::new("u1", FIRE))
        .await
        .unwrap();
    let body: UpdateReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.user_reaction, None);
    assert_eq!(total(&body.counts), 0);
}
