pub mod entities;
pub mod pagination;
pub mod use_cases;
