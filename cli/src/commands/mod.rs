pub mod auth;
pub mod download;
pub mod jobs;
pub mod ls;
pub mod projects;
pub mod rm;
pub mod upload;
