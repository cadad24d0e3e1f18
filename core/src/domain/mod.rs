pub mod associate;
pub mod authentication;
pub mod common;
pub mod crypto;
pub mod health;
pub mod notification;
pub mod project;
pub mod property;
pub mod request;
pub mod storage;
pub mod user;
