pub mod chat;
pub mod probes;
pub mod projects;
pub mod ui;
