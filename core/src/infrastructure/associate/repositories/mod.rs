pub mod associate_repository;
