pub mod prelude;

pub mod associates;
pub mod project_associates;
pub mod projects;
pub mod properties;
pub mod requests;
pub mod users;
