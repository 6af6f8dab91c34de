use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Experience {
    pub id: i64,
    pub title: String,
    pub description: Vec<String>,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Experience {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Caller-owned fields of an experience; id and timestamps belong to storage.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceInsert {
    pub title: String,
    pub description: Vec<String>,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
}

// ───── Input & Validation ───────────────────────────────────────────

/// Request body for both creating and replacing an experience.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExperienceRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(
        length(min = 1, message = "Description must contain at least one line"),
        custom(function = "validate_description_lines")
    )]
    pub description: Vec<String>,

    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,

    #[validate(length(min = 1, message = "Start date is required"))]
    pub start_date: String,

    #[validate(length(min = 1, message = "End date is required"))]
    pub end_date: String,
}

fn validate_description_lines(lines: &Vec<String>) -> Result<(), ValidationError> {
    if lines.iter().any(|line| line.trim().is_empty()) {
        let mut err = ValidationError::new("blank_description_line");
        err.message = Some("Description lines cannot be blank".into());
        return Err(err);
    }
    Ok(())
}

impl ExperienceRequest {
    /// Strips surrounding whitespace so whitespace-only fields fail `validate()`.
    pub fn trimmed(self) -> Self {
        ExperienceRequest {
            title: self.title.trim().to_string(),
            description: self.description,
            company: self.company.trim().to_string(),
            start_date: self.start_date.trim().to_string(),
            end_date: self.end_date.trim().to_string(),
        }
    }
}

impl From<ExperienceRequest> for ExperienceInsert {
    fn from(request: ExperienceRequest) -> Self {
        let request = request.trimmed();
        ExperienceInsert {
            title: request.title,
            description: request.description,
            company: request.company,
            start_date: request.start_date,
            end_date: request.end_date,
        }
    }
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct ExperienceActionResponse {
    pub id: i64,
    pub message: String,
}
