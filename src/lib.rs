use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod telemetry;

pub use domain::{entities, pagination, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{db, utils};

use repositories::experience::ExperienceRepository;
use use_cases::experiences::ExperienceHandler;

pub type AppExperienceHandler = ExperienceHandler<Arc<dyn ExperienceRepository>>;

pub struct AppState {
    pub experience_handler: AppExperienceHandler,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, experience_repo: Arc<dyn ExperienceRepository>) -> Self {
        let experience_handler = ExperienceHandler::new(experience_repo)
            .with_request_timeout(config.request_timeout());

        AppState { experience_handler }
    }
}
