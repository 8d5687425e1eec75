pub mod interactions;
pub mod projects;
pub mod resume;
