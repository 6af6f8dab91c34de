pub mod experiences;
pub mod home;
pub mod system;
