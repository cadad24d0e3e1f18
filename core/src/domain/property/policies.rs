use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, policies::ensure_policy},
    property::entities::Property,
    user::entities::Role,
};

pub fn ensure_can_publish(identity: &Identity) -> Result<(), CoreError> {
    ensure_policy(
        identity.has_access(Role::Editor),
        "editor access required to manage listings",
    )
}

/// Editors manage their own listings. Other agents' listings need admin access.
pub fn ensure_can_manage(identity: &Identity, property: &Property) -> Result<(), CoreError> {
    ensure_can_publish(identity)?;
    ensure_policy(
        identity.can_act_on(property.agent),
        "only the listing agent or an admin can modify this property",
    )
}
