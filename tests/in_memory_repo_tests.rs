
use portfolio_api::{
    errors::AppError,
    pagination::{PageRequest, PaginationParams},
    repositories::{experience::ExperienceRepository, in_memory::InMemoryExperienceRepo},
};
use test_utils::sample_insert;

async fn seeded(count: usize) -> (InMemoryExperienceRepo, Vec<i64>) {
    let repo = InMemoryExperienceRepo::new();
    let mut ids = Vec::new();
    for n in 0..count {
        let created = repo
            .create_experience(&sample_insert(&format!("Engineer {}", n)))
            .await
            .unwrap();
        ids.push(created.id);
    }
    (repo, ids)
}

#[actix_rt::test]
async fn create_assigns_id_and_matching_timestamps() {
    let repo = InMemoryExperienceRepo::new();

    let created = repo.create_experience(&sample_insert("Backend Engineer")).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.created_at, created.updated_at);
    assert!(created.deleted_at.is_none());
    assert_eq!(created.title, "Backend Engineer");
    assert_eq!(created.description.len(), 2);
}

#[actix_rt::test]
async fn ids_are_unique() {
    let (_, ids) = seeded(3).await;
    assert_eq!(ids, vec![1, 2, 3]);
}

#[actix_rt::test]
async fn list_all_returns_every_active_row_newest_first() {
    let (repo, ids) = seeded(3).await;

    let page = repo.list_experiences(PageRequest::All).await.unwrap();

    assert_eq!(page.data.len(), 3);
    assert_eq!(page.data.iter().map(|e| e.id).collect::<Vec<_>>(), vec![ids[2], ids[1], ids[0]]);
    assert_eq!(page.pagination.limit, 3);
    assert_eq!(page.pagination.offset, 0);
    assert_eq!(page.pagination.total, 3);
    assert_eq!(page.pagination.total_pages, 1);
    assert!(!page.pagination.has_next);
}

#[actix_rt::test]
async fn list_all_on_empty_store_is_a_single_empty_page() {
    let repo = InMemoryExperienceRepo::new();

    let page = repo.list_experiences(PageRequest::All).await.unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.pagination.total, 0);
    assert_eq!(page.pagination.total_pages, 1);
}

#[actix_rt::test]
async fn list_window_slices_but_counts_all_active_rows() {
    let (repo, ids) = seeded(3).await;

    let first = repo
        .list_experiences(PageRequest::Window(PaginationParams::new(2, 0)))
        .await
        .unwrap();
    assert_eq!(first.data.len(), 2);
    assert_eq!(first.data[0].id, ids[2]);
    assert_eq!(first.pagination.total, 3);
    assert_eq!(first.pagination.total_pages, 2);
    assert!(first.pagination.has_next);
    assert!(!first.pagination.has_prev);

    let second = repo
        .list_experiences(PageRequest::Window(PaginationParams::new(2, 2)))
        .await
        .unwrap();
    assert_eq!(second.data.len(), 1);
    assert_eq!(second.data[0].id, ids[0]);
    assert!(!second.pagination.has_next);
    assert!(second.pagination.has_prev);
}

#[actix_rt::test]
async fn soft_deleted_rows_are_hidden_from_active_operations() {
    let (repo, ids) = seeded(3).await;

    repo.soft_delete_experience(ids[1]).await.unwrap();

    assert!(matches!(repo.get_experience_by_id(ids[1]).await, Err(AppError::NotFound(_))));
    let page = repo.list_experiences(PageRequest::All).await.unwrap();
    assert_eq!(page.pagination.total, 2);
    assert!(page.data.iter().all(|e| e.id != ids[1]));

    // A second soft delete finds no active row
    assert!(matches!(repo.soft_delete_experience(ids[1]).await, Err(AppError::NotFound(_))));
    assert!(matches!(
        repo.update_experience(ids[1], &sample_insert("Ghost")).await,
        Err(AppError::NotFound(_))
    ));
}

#[actix_rt::test]
async fn restore_brings_back_the_same_entity() {
    let (repo, ids) = seeded(1).await;
    let before = repo.get_experience_by_id(ids[0]).await.unwrap();

    repo.soft_delete_experience(ids[0]).await.unwrap();
    repo.restore_experience(ids[0]).await.unwrap();

    let after = repo.get_experience_by_id(ids[0]).await.unwrap();
    assert_eq!(after.id, before.id);
    assert_eq!(after.title, before.title);
    assert_eq!(after.description, before.description);
    assert_eq!(after.company, before.company);
    assert_eq!(after.start_date, before.start_date);
    assert_eq!(after.end_date, before.end_date);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.deleted_at.is_none());
    assert!(after.updated_at > before.updated_at);
}

#[actix_rt::test]
async fn restore_requires_a_soft_deleted_row() {
    let (repo, ids) = seeded(1).await;

    assert!(matches!(repo.restore_experience(ids[0]).await, Err(AppError::NotFound(_))));
    assert!(matches!(repo.restore_experience(404).await, Err(AppError::NotFound(_))));
}

#[actix_rt::test]
async fn hard_delete_cannot_be_restored() {
    let (repo, ids) = seeded(1).await;

    repo.hard_delete_experience(ids[0]).await.unwrap();

    assert!(matches!(repo.restore_experience(ids[0]).await, Err(AppError::NotFound(_))));
    assert!(matches!(repo.hard_delete_experience(ids[0]).await, Err(AppError::NotFound(_))));
}

#[actix_rt::test]
async fn hard_delete_also_removes_soft_deleted_rows() {
    let (repo, ids) = seeded(1).await;

    repo.soft_delete_experience(ids[0]).await.unwrap();
    repo.hard_delete_experience(ids[0]).await.unwrap();

    let deleted = repo.list_deleted_experiences(PageRequest::All).await.unwrap();
    assert!(deleted.data.is_empty());
}

#[actix_rt::test]
async fn update_refreshes_updated_at_only() {
    let (repo, ids) = seeded(1).await;
    let before = repo.get_experience_by_id(ids[0]).await.unwrap();

    let mut changes = sample_insert("Staff Engineer");
    changes.description = vec!["Owned the platform roadmap".to_string()];
    let updated = repo.update_experience(ids[0], &changes).await.unwrap();

    assert_eq!(updated.id, before.id);
    assert_eq!(updated.title, "Staff Engineer");
    assert_eq!(updated.description, vec!["Owned the platform roadmap".to_string()]);
    assert_eq!(updated.created_at, before.created_at);
    assert!(updated.updated_at > before.updated_at);
    assert_eq!(repo.get_experience_by_id(ids[0]).await.unwrap(), updated);
}

#[actix_rt::test]
async fn update_on_unknown_id_is_not_found() {
    let repo = InMemoryExperienceRepo::new();

    let result = repo.update_experience(42, &sample_insert("Nobody")).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[actix_rt::test]
async fn list_deleted_orders_by_most_recent_deletion() {
    let (repo, ids) = seeded(3).await;

    repo.soft_delete_experience(ids[2]).await.unwrap();
    repo.soft_delete_experience(ids[0]).await.unwrap();

    let deleted = repo.list_deleted_experiences(PageRequest::All).await.unwrap();
    assert_eq!(deleted.data.iter().map(|e| e.id).collect::<Vec<_>>(), vec![ids[0], ids[2]]);
    assert!(deleted.data.iter().all(|e| e.deleted_at.is_some()));
    assert_eq!(deleted.pagination.total, 2);

    let window = repo
        .list_deleted_experiences(PageRequest::Window(PaginationParams::new(1, 1)))
        .await
        .unwrap();
    assert_eq!(window.data.len(), 1);
    assert_eq!(window.data[0].id, ids[2]);
    assert_eq!(window.pagination.total, 2);
    assert!(window.pagination.has_prev);
    assert!(!window.pagination.has_next);
}
