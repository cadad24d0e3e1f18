pub mod create_associate;
pub mod delete_associate;
pub mod update_associate;
