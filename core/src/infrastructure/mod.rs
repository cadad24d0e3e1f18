pub mod associate;
pub mod crypto;
pub mod db;
pub mod health;
pub mod jwt;
pub mod notification;
pub mod project;
pub mod property;
pub mod request;
pub mod storage;
pub mod user;
