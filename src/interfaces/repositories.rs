pub mod experience;
pub mod in_memory;
pub mod sqlx_repo;
