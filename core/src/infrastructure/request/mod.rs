pub mod conditions;
pub mod mappers;
pub mod repositories;
