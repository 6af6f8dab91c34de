use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Forced during bootstrap so uptime counts from process start.
pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const API_PREFIX: &str = "/v1";
