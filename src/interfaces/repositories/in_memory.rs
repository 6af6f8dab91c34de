use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;

use crate::{
    entities::experience::{Experience, ExperienceInsert},
    errors::AppError,
    pagination::{PageRequest, PaginatedResponse, PaginationMetadata},
    repositories::experience::{not_found, ExperienceRepository, Scope},
};

/// Process-local experience store with the same contract as the Postgres one.
#[derive(Clone, Default)]
pub struct InMemoryExperienceRepo {
    inner: Arc<RwLock<Store>>,
}

#[derive(Default)]
struct Store {
    last_id: i64,
    last_tick: Option<DateTime<Utc>>,
    rows: BTreeMap<i64, Experience>,
}

impl Store {
    /// Wall-clock time, nudged forward so successive mutations never share a timestamp.
    fn tick(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let now = match self.last_tick {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_tick = Some(now);
        now
    }

    fn list(&self, scope: Scope, page: PageRequest) -> PaginatedResponse<Experience> {
        let mut matching: Vec<&Experience> = self
            .rows
            .values()
            .filter(|experience| scope.contains(experience))
            .collect();

        matching.sort_by(|a, b| {
            let key = |e: &Experience| match scope {
                Scope::Active => (e.created_at, e.id),
                Scope::Deleted => (e.deleted_at.unwrap_or(e.created_at), e.id),
            };
            key(*b).cmp(&key(*a))
        });

        let total = matching.len() as i64;
        let (limit, offset) = match page {
            PageRequest::All => (total, 0),
            PageRequest::Window(params) => (params.limit, params.offset),
        };

        let data = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();

        PaginatedResponse::new(data, PaginationMetadata::new(limit, offset, total))
    }

    fn active_mut(&mut self, id: i64) -> Result<&mut Experience, AppError> {
        self.rows
            .get_mut(&id)
            .filter(|experience| Scope::Active.contains(experience))
            .ok_or_else(not_found)
    }
}

impl InMemoryExperienceRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExperienceRepository for InMemoryExperienceRepo {
    async fn check_connection(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn create_experience(&self, experience: &ExperienceInsert) -> Result<Experience, AppError> {
        let mut store = self.inner.write();
        let now = store.tick();
        store.last_id += 1;

        let created = Experience {
            id: store.last_id,
            title: experience.title.clone(),
            description: experience.description.clone(),
            company: experience.company.clone(),
            start_date: experience.start_date.clone(),
            end_date: experience.end_date.clone(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        store.rows.insert(created.id, created.clone());

        Ok(created)
    }

    async fn list_experiences(&self, page: PageRequest) -> Result<PaginatedResponse<Experience>, AppError> {
        Ok(self.inner.read().list(Scope::Active, page))
    }

    async fn get_experience_by_id(&self, id: i64) -> Result<Experience, AppError> {
        self.inner
            .read()
            .rows
            .get(&id)
            .filter(|experience| Scope::Active.contains(experience))
            .cloned()
            .ok_or_else(not_found)
    }

    async fn update_experience(&self, id: i64, experience: &ExperienceInsert) -> Result<Experience, AppError> {
        let mut store = self.inner.write();
        let now = store.tick();
        let row = store.active_mut(id)?;

        row.title = experience.title.clone();
        row.description = experience.description.clone();
        row.company = experience.company.clone();
        row.start_date = experience.start_date.clone();
        row.end_date = experience.end_date.clone();
        row.updated_at = now;

        Ok(row.clone())
    }

    async fn soft_delete_experience(&self, id: i64) -> Result<(), AppError> {
        let mut store = self.inner.write();
        let now = store.tick();
        let row = store.active_mut(id)?;

        row.deleted_at = Some(now);
        row.updated_at = now;

        Ok(())
    }

    async fn restore_experience(&self, id: i64) -> Result<(), AppError> {
        let mut store = self.inner.write();
        let now = store.tick();
        let row = store
            .rows
            .get_mut(&id)
            .filter(|experience| Scope::Deleted.contains(experience))
            .ok_or_else(not_found)?;

        row.deleted_at = None;
        row.updated_at = now;

        Ok(())
    }

    async fn hard_delete_experience(&self, id: i64) -> Result<(), AppError> {
        self.inner
            .write()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(not_found)
    }

    async fn list_deleted_experiences(&self, page: PageRequest) -> Result<PaginatedResponse<Experience>, AppError> {
        Ok(self.inner.read().list(Scope::Deleted, page))
    }
}
