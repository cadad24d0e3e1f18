use crate::domain::common::entities::app_errors::CoreError;

use super::entities::TemplateMessage;

#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn send_template(
        &self,
        to: String,
        message: TemplateMessage,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
