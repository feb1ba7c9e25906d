//! Integration tests for the generic repository against a real database.

use assert_matches::assert_matches;
use chrono::NaiveDate;
use sqlx::PgPool;
use showcase_db::models::content::ContentInput;
use showcase_db::models::event::{Event, EventInput};
use showcase_db::models::media::{EventMedia, MediaFields};
use showcase_db::models::news::{News, NewsInput};
use showcase_db::models::partner::{Partner, PartnerInput};
use showcase_db::models::product::{Product, ProductCategory, ProductCategoryInput, ProductInput};
use showcase_db::models::service::{ServiceCategory, ServiceCategoryInput};
use showcase_db::models::team::{TeamSection, TeamSectionInput};
use showcase_db::repositories::{row_exists, ContentRepo, MediaRepo, Repo};
use showcase_db::resource::Resource;
use showcase_db::{Db, QueryError};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_event(title: &str) -> EventInput {
    EventInput {
        title: title.to_string(),
        subtitle: Some("Subtitle".to_string()),
        date: Some(date(2025, 1, 1)),
        description: "Kickoff".to_string(),
    }
}

fn new_media(url: &str, title: Option<&str>) -> MediaFields {
    MediaFields {
        url: url.to_string(),
        media_type: "image".to_string(),
        title: title.map(str::to_string),
        caption: None,
        thumbnail_url: None,
        duration: None,
        size: Some(1024),
        mime_type: Some("image/png".to_string()),
    }
}

fn new_partner(name: &str) -> PartnerInput {
    PartnerInput {
        name: name.to_string(),
        image_url: Some("/uploads/partners/logo.png".to_string()),
        description: Some("Long-time partner".to_string()),
        website_url: Some("https://example.com".to_string()),
    }
}

fn new_category(name: &str) -> ProductCategoryInput {
    ProductCategoryInput {
        name: name.to_string(),
        description: None,
        image_url: None,
        icon_url: None,
    }
}

// ---------------------------------------------------------------------------
// Create / read / update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_find_returns_submitted_fields(pool: PgPool) {
    let db = Db::new(pool);
    let created = Repo::<Partner>::create(&db, &new_partner("Acme")).await.unwrap();
    assert!(created.id > 0);

    let found = Repo::<Partner>::find_by_id(&db, created.id)
        .await
        .unwrap()
        .expect("partner should exist");
    assert_eq!(found.name, "Acme");
    assert_eq!(found.website_url.as_deref(), Some("https://example.com"));
    assert_eq!(found.description.as_deref(), Some("Long-time partner"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_overwrites_every_column(pool: PgPool) {
    let db = Db::new(pool);
    let created = Repo::<Partner>::create(&db, &new_partner("Acme")).await.unwrap();

    let replacement = PartnerInput {
        name: "Acme Corp".to_string(),
        image_url: None,
        description: None,
        website_url: None,
    };
    let updated = Repo::<Partner>::update(&db, created.id, &replacement)
        .await
        .unwrap()
        .expect("row should be updated");
    assert_eq!(updated.id, created.id);

    let found = Repo::<Partner>::find_by_id(&db, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.name, "Acme Corp");
    assert!(found.image_url.is_none());
    assert!(found.description.is_none());
    assert!(found.website_url.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_row_returns_none(pool: PgPool) {
    let db = Db::new(pool);
    let result = Repo::<Partner>::update(&db, 999_999, &new_partner("Ghost"))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_then_find_is_absent(pool: PgPool) {
    let db = Db::new(pool);
    let created = Repo::<Partner>::create(&db, &new_partner("Acme")).await.unwrap();

    assert!(Repo::<Partner>::delete(&db, created.id).await.unwrap());
    assert!(Repo::<Partner>::find_by_id(&db, created.id)
        .await
        .unwrap()
        .is_none());
    assert!(!Repo::<Partner>::delete(&db, created.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_empty_table_returns_empty_vec(pool: PgPool) {
    let db = Db::new(pool);
    assert!(Repo::<Partner>::list(&db).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_orders_by_name(pool: PgPool) {
    let db = Db::new(pool);
    for name in ["Zeta", "Alpha", "Mid"] {
        Repo::<Partner>::create(&db, &new_partner(name)).await.unwrap();
    }
    let names: Vec<String> = Repo::<Partner>::list(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["Alpha", "Mid", "Zeta"]);
}

// ---------------------------------------------------------------------------
// Joined projections and filters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_returns_joined_category_name(pool: PgPool) {
    let db = Db::new(pool);
    let category = Repo::<ServiceCategory>::create(
        &db,
        &ServiceCategoryInput {
            name: "Consulting".to_string(),
            description: "Advice".to_string(),
            icon_url: "/icons/c.svg".to_string(),
        },
    )
    .await
    .unwrap();

    let input = NewsInput {
        title: "Opening".to_string(),
        subtitle: "New office".to_string(),
        publish_date: Some(date(2025, 3, 1)),
        is_featured: true,
        content: "We opened.".to_string(),
        image_url: None,
        category_id: Some(category.id),
    };
    let news = Repo::<News>::create(&db, &input).await.unwrap();
    assert_eq!(news.category_name.as_deref(), Some("Consulting"));

    let featured = Repo::<News>::list_by(&db, "is_featured", true).await.unwrap();
    assert_eq!(featured.len(), 1);
    let by_category = Repo::<News>::list_by(&db, "category_id", category.id)
        .await
        .unwrap();
    assert_eq!(by_category[0].id, news.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_matches_media_and_event_titles(pool: PgPool) {
    let db = Db::new(pool);
    let event = Repo::<Event>::create(&db, &new_event("Product Launch"))
        .await
        .unwrap();
    Repo::<EventMedia>::create(&db, &new_media("/a.png", Some("Stage")).for_event(event.id))
        .await
        .unwrap();

    let by_media_title = Repo::<EventMedia>::search(&db, "stage").await.unwrap();
    assert_eq!(by_media_title.len(), 1);
    assert_eq!(by_media_title[0].event_title.as_deref(), Some("Product Launch"));

    let by_event_title = Repo::<EventMedia>::search(&db, "LAUNCH").await.unwrap();
    assert_eq!(by_event_title.len(), 1);

    let nothing = Repo::<EventMedia>::search(&db, "xyz").await.unwrap();
    assert!(nothing.is_empty());

    let wildcard = Repo::<EventMedia>::search(&db, "%").await.unwrap();
    assert!(wildcard.is_empty(), "LIKE wildcards must be matched literally");
}

// ---------------------------------------------------------------------------
// Relationships
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_event_cascades_to_media(pool: PgPool) {
    let db = Db::new(pool);
    let event = Repo::<Event>::create(&db, &new_event("Launch")).await.unwrap();
    Repo::<EventMedia>::create(&db, &new_media("/a.png", None).for_event(event.id))
        .await
        .unwrap();
    Repo::<EventMedia>::create(&db, &new_media("/b.png", None).for_event(event.id))
        .await
        .unwrap();

    assert!(Repo::<Event>::delete(&db, event.id).await.unwrap());
    let media = Repo::<EventMedia>::list_by(&db, "event_id", event.id)
        .await
        .unwrap();
    assert!(media.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_with_products_reports_blocking_dependent(pool: PgPool) {
    let db = Db::new(pool);
    let category = Repo::<ProductCategory>::create(&db, &new_category("Hardware"))
        .await
        .unwrap();
    assert!(Repo::<ProductCategory>::blocking_dependent(&db, category.id)
        .await
        .unwrap()
        .is_none());

    Repo::<Product>::create(
        &db,
        &ProductInput {
            name: "Router".to_string(),
            description: None,
            category_id: category.id,
            image_url: None,
        },
    )
    .await
    .unwrap();

    let blocked = Repo::<ProductCategory>::blocking_dependent(&db, category.id)
        .await
        .unwrap();
    assert!(blocked.unwrap().starts_with("Cannot delete category"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_parent_refs_and_row_exists(pool: PgPool) {
    let db = Db::new(pool);
    let input = ProductInput {
        name: "Orphan".to_string(),
        description: None,
        category_id: 9999,
        image_url: None,
    };
    let parents = Product::parents(&input);
    assert_eq!(parents.len(), 1);
    assert_eq!(parents[0].message, "Invalid category");
    assert!(!row_exists(&db, parents[0].table, parents[0].id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_foreign_key_violation_is_query_error(pool: PgPool) {
    let db = Db::new(pool);
    let input = ProductInput {
        name: "Orphan".to_string(),
        description: None,
        category_id: 9999,
        image_url: None,
    };
    let err = Repo::<Product>::create(&db, &input).await.unwrap_err();
    assert_eq!(err.sqlstate().as_deref(), Some("23503"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_team_section_is_unique_violation(pool: PgPool) {
    let db = Db::new(pool);
    let input = TeamSectionInput {
        title: "Our team".to_string(),
        description: "People".to_string(),
    };
    Repo::<TeamSection>::create(&db, &input).await.unwrap();

    let err = Repo::<TeamSection>::create(&db, &input).await.unwrap_err();
    assert!(err.is_unique_violation());
    assert_eq!(Repo::<TeamSection>::list(&db).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Hand-written repositories
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_content_sections_are_distinct_and_ordered(pool: PgPool) {
    let db = Db::new(pool);
    for (section, order) in [("mission", 2), ("history", 1), ("mission", 3), ("values", 5)] {
        Repo::<showcase_db::models::content::Content>::create(
            &db,
            &ContentInput {
                section: section.to_string(),
                title: None,
                content: "Text".to_string(),
                order: Some(order),
            },
        )
        .await
        .unwrap();
    }
    let sections = ContentRepo::sections(&db).await.unwrap();
    assert_eq!(sections, ["history", "mission", "values"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_content_order_defaults_to_zero(pool: PgPool) {
    let db = Db::new(pool);
    let content = Repo::<showcase_db::models::content::Content>::create(
        &db,
        &ContentInput {
            section: "intro".to_string(),
            title: Some("Welcome".to_string()),
            content: "Hello".to_string(),
            order: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(content.order, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_media_by_url(pool: PgPool) {
    let db = Db::new(pool);
    let event = Repo::<Event>::create(&db, &new_event("Launch")).await.unwrap();
    Repo::<EventMedia>::create(&db, &new_media("/shared.png", None).for_event(event.id))
        .await
        .unwrap();

    assert_eq!(MediaRepo::delete_by_url(&db, "/shared.png").await.unwrap(), 1);
    assert_eq!(MediaRepo::delete_by_url(&db, "/shared.png").await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Executor
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_failed_statement_releases_connection(pool: PgPool) {
    let db = Db::new(pool).with_query_log(true);
    for _ in 0..25 {
        let result = db
            .execute(sqlx::query("INSERT INTO no_such_table VALUES (1)"))
            .await;
        assert_matches!(result, Err(QueryError(sqlx::Error::Database(_))));
    }
    // The pool must still hand out connections after repeated failures.
    assert!(Repo::<Partner>::list(&db).await.unwrap().is_empty());
}
