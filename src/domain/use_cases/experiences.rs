use std::time::Duration;

use validator::Validate;

use crate::{
    entities::experience::{Experience, ExperienceActionResponse, ExperienceInsert, ExperienceRequest},
    errors::AppError,
    pagination::{PageRequest, PaginatedResponse},
    repositories::experience::ExperienceRepository,
    utils::{deadline::with_deadline, valid_id::valid_id},
};

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct ExperienceHandler<R>
where
    R: ExperienceRepository,
{
    pub experience_repo: R,
    pub request_timeout: Duration,
}

impl<R> ExperienceHandler<R>
where
    R: ExperienceRepository,
{
    pub fn new(experience_repo: R) -> Self {
        ExperienceHandler {
            experience_repo,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Validates the payload and stores a new experience
    pub async fn create_experience(&self, request: ExperienceRequest) -> Result<Experience, AppError> {
        let request = request.trimmed();
        request.validate()?;

        let insert: ExperienceInsert = request.into();

        with_deadline(
            self.request_timeout,
            self.experience_repo.create_experience(&insert),
        )
        .await
    }

    /// Lists active experiences, either all of them or a single window
    pub async fn list_experiences(&self, page: PageRequest) -> Result<PaginatedResponse<Experience>, AppError> {
        with_deadline(self.request_timeout, self.experience_repo.list_experiences(page)).await
    }

    /// Retrieves an active experience by its ID
    pub async fn get_experience(&self, id: &str) -> Result<Experience, AppError> {
        let experience_id = valid_id(id)?;

        with_deadline(
            self.request_timeout,
            self.experience_repo.get_experience_by_id(experience_id),
        )
        .await
    }

    /// Replaces every caller-owned field of an active experience
    pub async fn update_experience(
        &self,
        id: &str,
        request: ExperienceRequest,
    ) -> Result<Experience, AppError> {
        let experience_id = valid_id(id)?;
        let request = request.trimmed();
        request.validate()?;

        let insert: ExperienceInsert = request.into();

        with_deadline(
            self.request_timeout,
            self.experience_repo.update_experience(experience_id, &insert),
        )
        .await
    }

    /// Deletes an experience; soft unless `hard_delete` is set
    pub async fn delete_experience(
        &self,
        id: &str,
        hard_delete: bool,
    ) -> Result<ExperienceActionResponse, AppError> {
        let experience_id = valid_id(id)?;

        let deletion = async {
            match hard_delete {
                true => self.experience_repo.hard_delete_experience(experience_id).await,
                false => self.experience_repo.soft_delete_experience(experience_id).await,
            }
        };
        with_deadline(self.request_timeout, deletion).await?;

        Ok(ExperienceActionResponse {
            id: experience_id,
            message: match hard_delete {
                true => "Experience permanently deleted".to_string(),
                false => "Experience deleted successfully".to_string(),
            },
        })
    }

    /// Moves a soft-deleted experience back to the active set
    pub async fn restore_experience(&self, id: &str) -> Result<ExperienceActionResponse, AppError> {
        let experience_id = valid_id(id)?;

        with_deadline(
            self.request_timeout,
            self.experience_repo.restore_experience(experience_id),
        )
        .await?;

        Ok(ExperienceActionResponse {
            id: experience_id,
            message: "Experience restored successfully".to_string(),
        })
    }

    /// Lists soft-deleted experiences
    pub async fn list_deleted_experiences(&self, page: PageRequest) -> Result<PaginatedResponse<Experience>, AppError> {
        with_deadline(
            self.request_timeout,
            self.experience_repo.list_deleted_experiences(page),
        )
        .await
    }
}
