use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::ensure_policy},
    user::entities::Role,
};

pub fn ensure_can_manage_projects(identity: &Identity) -> Result<(), CoreError> {
    ensure_policy(
        identity.has_access(Role::Editor),
        "editor access required to manage projects",
    )
}
