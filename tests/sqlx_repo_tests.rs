//! Runs against a real Postgres instance:
//! `TEST_DATABASE_URL=postgres://... cargo test -- --ignored`


use portfolio_api::{
    db::postgres::run_migrations,
    errors::AppError,
    pagination::{PageRequest, PaginationParams},
    repositories::{
        experience::ExperienceRepository,
        sqlx_repo::{RepositoryConfig, SqlxExperienceRepo},
    },
};
use sqlx::postgres::PgPoolOptions;
use test_utils::sample_insert;

async fn repo() -> SqlxExperienceRepo {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to test database");

    run_migrations(&pool).await.expect("Failed to run migrations");

    sqlx::query("TRUNCATE TABLE experiences RESTART IDENTITY")
        .execute(&pool)
        .await
        .expect("Failed to truncate experiences");

    SqlxExperienceRepo::new(pool, RepositoryConfig::default())
}

#[actix_rt::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn lifecycle_against_postgres() {
    let repo = repo().await;

    let created = repo.create_experience(&sample_insert("Backend Engineer")).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.created_at, created.updated_at);
    assert_eq!(created.description.len(), 2);

    let fetched = repo.get_experience_by_id(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let updated = repo
        .update_experience(created.id, &sample_insert("Staff Engineer"))
        .await
        .unwrap();
    assert_eq!(updated.title, "Staff Engineer");
    assert!(updated.updated_at >= created.updated_at);

    repo.soft_delete_experience(created.id).await.unwrap();
    assert!(matches!(repo.get_experience_by_id(created.id).await, Err(AppError::NotFound(_))));

    let deleted = repo.list_deleted_experiences(PageRequest::All).await.unwrap();
    assert_eq!(deleted.pagination.total, 1);
    assert!(deleted.data[0].deleted_at.is_some());

    repo.restore_experience(created.id).await.unwrap();
    assert_eq!(repo.get_experience_by_id(created.id).await.unwrap().title, "Staff Engineer");

    repo.hard_delete_experience(created.id).await.unwrap();
    assert!(matches!(repo.restore_experience(created.id).await, Err(AppError::NotFound(_))));
    assert!(matches!(repo.hard_delete_experience(created.id).await, Err(AppError::NotFound(_))));
}

#[actix_rt::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn listing_against_postgres() {
    let repo = repo().await;
    for title in ["One", "Two", "Three"] {
        repo.create_experience(&sample_insert(title)).await.unwrap();
    }

    let all = repo.list_experiences(PageRequest::All).await.unwrap();
    assert_eq!(all.data.len(), 3);
    assert_eq!(all.pagination.limit, 3);
    assert_eq!(all.data[0].title, "Three");

    let page = repo
        .list_experiences(PageRequest::Window(PaginationParams::new(2, 0)))
        .await
        .unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.pagination.total, 3);
    assert!(page.pagination.has_next);

    assert!(matches!(
        repo.update_experience(9999, &sample_insert("Nobody")).await,
        Err(AppError::NotFound(_))
    ));
}
