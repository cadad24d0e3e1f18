pub mod create_user;
pub mod delete_user_picture;
pub mod update_password;
pub mod update_user;
pub mod update_user_picture;
