pub mod associate;
pub mod authentication;
pub mod health;
pub mod multipart;
pub mod project;
pub mod property;
pub mod query_extractor;
pub mod request;
pub mod server;
pub mod user;
