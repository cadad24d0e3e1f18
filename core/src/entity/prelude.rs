pub use super::associates::Entity as Associates;
pub use super::project_associates::Entity as ProjectAssociates;
pub use super::projects::Entity as Projects;
pub use super::properties::Entity as Properties;
pub use super::requests::Entity as Requests;
pub use super::users::Entity as Users;
