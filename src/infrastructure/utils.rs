pub mod deadline;
pub mod valid_id;
