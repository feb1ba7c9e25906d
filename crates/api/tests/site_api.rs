//! HTTP-level integration tests for news, media search, partners,
//! references, teams, contents, and user lookup.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_id, get, get_auth, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// News
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_news_featured_and_unknown_category(pool: PgPool) {
    let body = |title: &str, featured: bool| {
        json!({
            "title": title,
            "subtitle": "Sub",
            "content": "Body",
            "publish_date": "2025-03-01",
            "is_featured": featured,
        })
    };
    create_id(common::build_test_app(pool.clone()), "/api/news", body("Plain", false)).await;
    create_id(common::build_test_app(pool.clone()), "/api/news", body("Headline", true)).await;

    let response = get(common::build_test_app(pool.clone()), "/api/news/featured").await;
    let json = body_json(response).await;
    let featured = json.as_array().unwrap();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0]["title"], "Headline");

    let mut with_category = body("Categorised", false);
    with_category["category_id"] = json!(555);
    let response = post_json(common::build_test_app(pool), "/api/news", with_category).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Invalid category");
}

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_media_search_and_type_filter(pool: PgPool) {
    let event = create_id(
        common::build_test_app(pool.clone()),
        "/api/events",
        json!({"title": "Expo", "date": "2025-05-05", "description": "Fair"}),
    )
    .await;
    create_id(
        common::build_test_app(pool.clone()),
        "/api/media",
        json!({"event_id": event, "url": "http://cdn.test/x.png", "type": "image", "caption": "Main hall"}),
    )
    .await;

    let response = get(common::build_test_app(pool.clone()), "/api/media/search?term=xyz").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));

    let response = get(common::build_test_app(pool.clone()), "/api/media/search?term=HALL").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    // Event title matches too.
    let response = get(common::build_test_app(pool.clone()), "/api/media/search?term=expo").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let response = get(common::build_test_app(pool.clone()), "/api/media/search").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A blank term must not turn into a match-everything pattern.
    let response = get(common::build_test_app(pool.clone()), "/api/media/search?term=%20%20").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["errors"][0]["message"], "Search term is required");

    let response = get(common::build_test_app(pool.clone()), "/api/media/search?term=%20hall%20").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let response = get(common::build_test_app(pool.clone()), "/api/media/type/image").await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let response = get(common::build_test_app(pool), "/api/media/type/audio").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["errors"][0]["field"], "type");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_media_with_unknown_event_is_400(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/media",
        json!({"event_id": 404, "url": "http://cdn.test/y.png", "type": "image"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Invalid event");
}

// ---------------------------------------------------------------------------
// Partners and references
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partner_website_must_be_url(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/partners",
        json!({"name": "Acme", "website_url": "not a url"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["errors"][0]["field"], "website_url");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_references_complete_data_is_not_shadowed(pool: PgPool) {
    create_id(
        common::build_test_app(pool.clone()),
        "/api/references",
        json!({"client_name": "Dana", "testimonial": "Great", "rating": 5, "is_featured": true}),
    )
    .await;
    create_id(
        common::build_test_app(pool.clone()),
        "/api/references",
        json!({"client_name": "Lee", "testimonial": "Fine"}),
    )
    .await;

    let response = get(common::build_test_app(pool.clone()), "/api/references/complete-data").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["references"].as_array().unwrap().len(), 2);
    assert_eq!(json["featuredReferences"].as_array().unwrap().len(), 1);

    let response = post_json(
        common::build_test_app(pool),
        "/api/references",
        json!({"client_name": "Max", "testimonial": "Meh", "rating": 7}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Teams
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_team_section_creates_leave_one_row(pool: PgPool) {
    let body = || json!({"title": "Our team", "description": "People"});
    let (first, second) = tokio::join!(
        post_json(common::build_test_app(pool.clone()), "/api/teams/section", body()),
        post_json(common::build_test_app(pool.clone()), "/api/teams/section", body()),
    );
    let mut statuses = [first.status(), second.status()];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::BAD_REQUEST]);

    let response = get(common::build_test_app(pool), "/api/teams/complete").await;
    assert_eq!(body_json(response).await["section"]["title"], "Our team");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_team_section_is_a_singleton(pool: PgPool) {
    let response = get(common::build_test_app(pool.clone()), "/api/teams/section").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Team section not found");

    let response = get(common::build_test_app(pool.clone()), "/api/teams/complete").await;
    let json = body_json(response).await;
    assert_eq!(json["section"], serde_json::Value::Null);
    assert_eq!(json["members"], json!([]));

    let id = create_id(
        common::build_test_app(pool.clone()),
        "/api/teams/section",
        json!({"title": "Our team", "description": "People"}),
    )
    .await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/teams/section",
        json!({"title": "Second", "description": "Nope"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Team section already exists. Use PUT to update."
    );

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/teams/section/{id}"),
        json!({"title": "Our people", "description": "Everyone"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    create_id(
        common::build_test_app(pool.clone()),
        "/api/teams/members",
        json!({"fullname": "Ada", "title": "CTO", "description": "Builds"}),
    )
    .await;
    create_id(
        common::build_test_app(pool.clone()),
        "/api/teams/gallery",
        json!({"image_url": "http://cdn.test/g.png"}),
    )
    .await;

    let response = get(common::build_test_app(pool), "/api/teams/complete").await;
    let json = body_json(response).await;
    assert_eq!(json["section"]["title"], "Our people");
    assert_eq!(json["members"][0]["fullname"], "Ada");
    assert_eq!(json["gallery"].as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Contents
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_content_sections_in_display_order(pool: PgPool) {
    for (section, order) in [("mission", 2), ("history", 1), ("mission", 3)] {
        create_id(
            common::build_test_app(pool.clone()),
            "/api/contents",
            json!({"section": section, "content": "Text", "order": order}),
        )
        .await;
    }

    let response = get(common::build_test_app(pool.clone()), "/api/contents/sections").await;
    assert_eq!(body_json(response).await, json!(["history", "mission"]));

    let response = get(common::build_test_app(pool.clone()), "/api/contents/section/mission").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["order"], 2);

    let response = get(common::build_test_app(pool), "/api/contents/section/vision").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["message"],
        "No content found for section: vision"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_content_order_defaults_to_zero(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/contents",
        json!({"section": "intro", "content": "Hello"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["order"], 0);
}

// ---------------------------------------------------------------------------
// Common
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_lookup(pool: PgPool) {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (username, email) VALUES ('sam', 'sam@example.com') RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    let response = get_auth(common::build_test_app(pool.clone()), &format!("/api/common/user/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["username"], "sam");
    assert_eq!(json["role"], "editor");

    let response = get_auth(common::build_test_app(pool.clone()), "/api/common/user/99999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "User not found");

    let response = get(common::build_test_app(pool), &format!("/api/common/user/{id}")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
