use actix_web::{
    web,
    error::{JsonPayloadError, QueryPayloadError},
};

use crate::errors::AppError;

const MAX_JSON_PAYLOAD: usize = 64 * 1024;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(MAX_JSON_PAYLOAD)
            .error_handler(|err, _req| AppError::from(err).into()),
    );
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::from(err).into()),
    );
}

impl From<JsonPayloadError> for AppError {
    fn from(err: JsonPayloadError) -> Self {
        match err {
            JsonPayloadError::Deserialize(e) => {
                AppError::InvalidInput(format!("Malformed JSON payload: {}", e))
            }
            JsonPayloadError::ContentType => {
                AppError::InvalidInput("Expected an application/json body".to_string())
            }
            other => AppError::InvalidInput(format!("JSON payload error: {}", other)),
        }
    }
}

impl From<QueryPayloadError> for AppError {
    fn from(err: QueryPayloadError) -> Self {
        AppError::InvalidInput(format!("Query string error: {}", err))
    }
}
