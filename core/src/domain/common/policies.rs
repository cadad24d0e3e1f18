use crate::domain::common::entities::app_errors::CoreError;

pub fn ensure_policy(allowed: bool, reason: &str) -> Result<(), CoreError> {
    if allowed {
        Ok(())
    } else {
        Err(CoreError::Forbidden(reason.to_string()))
    }
}
