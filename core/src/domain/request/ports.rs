use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, pagination::PageRequest},
    request::{
        entities::{Request, RequestPage},
        value_objects::{
            CreateRequestInput, QuoteRequestInput, QuoteTemplate, RequestFilter,
            UpdateRequestInput,
        },
    },
};

pub trait RequestService: Send + Sync {
    fn create_request(
        &self,
        input: CreateRequestInput,
    ) -> impl Future<Output = Result<Request, CoreError>> + Send;

    /// Notifies the sales phone through a message template and records the appointment.
    fn create_quote_request(
        &self,
        input: QuoteRequestInput,
        template: QuoteTemplate,
    ) -> impl Future<Output = Result<Request, CoreError>> + Send;

    fn list_requests(
        &self,
        identity: Identity,
        filter: RequestFilter,
        page: PageRequest,
    ) -> impl Future<Output = Result<RequestPage, CoreError>> + Send;

    fn find_request(
        &self,
        identity: Identity,
        request_id: Uuid,
    ) -> impl Future<Output = Result<Request, CoreError>> + Send;

    fn update_request(
        &self,
        identity: Identity,
        request_id: Uuid,
        input: UpdateRequestInput,
    ) -> impl Future<Output = Result<Request, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RequestRepository: Send + Sync {
    fn create_request(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Request, CoreError>> + Send;

    fn get_by_id(
        &self,
        request_id: Uuid,
    ) -> impl Future<Output = Result<Option<Request>, CoreError>> + Send;

    fn update_request(
        &self,
        request: Request,
    ) -> impl Future<Output = Result<Request, CoreError>> + Send;

    fn count(&self, filter: RequestFilter) -> impl Future<Output = Result<u64, CoreError>> + Send;

    /// Newest first.
    fn find_page(
        &self,
        filter: RequestFilter,
        page: PageRequest,
    ) -> impl Future<Output = Result<Vec<Request>, CoreError>> + Send;
}
