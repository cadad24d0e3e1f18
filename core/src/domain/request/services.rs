use chrono::Utc;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::domain::{
    associate::ports::AssociateRepository,
    authentication::{ports::TokenIssuer, value_objects::Identity},
    common::{
        entities::app_errors::CoreError,
        pagination::{PageRequest, Pagination},
        policies::ensure_policy,
        services::Service,
    },
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    notification::{entities::TemplateMessage, ports::Notifier},
    project::ports::ProjectRepository,
    property::ports::PropertyRepository,
    request::{
        entities::{Request, RequestPage, RequestType},
        ports::{RequestRepository, RequestService},
        value_objects::{
            CreateRequestInput, QUOTE_LANGUAGE, QuoteRequestInput, QuoteTemplate, RequestFilter,
            UNSPECIFIED_SCHEDULE, UpdateRequestInput,
        },
    },
    storage::ports::MediaStorage,
    user::{entities::Role, ports::UserRepository},
};

fn ensure_can_manage_requests(identity: &Identity) -> Result<(), CoreError> {
    ensure_policy(
        identity.has_access(Role::Editor),
        "editor access required to manage requests",
    )
}

fn ensure_contact(name: &str, phone: &str) -> Result<(), CoreError> {
    let missing: Vec<&str> = [("name", name), ("phone", phone)]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(format!(
            "missing required fields: {}",
            missing.join(", ")
        )))
    }
}

impl<P, PJ, A, RQ, U, H, T, HC, MS, N> RequestService for Service<P, PJ, A, RQ, U, H, T, HC, MS, N>
where
    P: PropertyRepository,
    PJ: ProjectRepository,
    A: AssociateRepository,
    RQ: RequestRepository,
    U: UserRepository,
    H: HasherRepository,
    T: TokenIssuer,
    HC: HealthCheckRepository,
    MS: MediaStorage,
    N: Notifier,
{
    #[instrument(skip(self, input), fields(request_type = input.request_type.as_str()))]
    async fn create_request(&self, input: CreateRequestInput) -> Result<Request, CoreError> {
        ensure_contact(&input.name, &input.phone)?;

        let mut request = Request::new(input.request_type, input.name, input.phone);
        request.scheduled_date = input.scheduled_date;

        if let Some(property_id) = input.property {
            let property = self
                .property_repository
                .get_by_id(property_id)
                .await?
                .ok_or_else(|| {
                    CoreError::InvalidInput(format!("property {property_id} does not exist"))
                })?;

            request.property = Some(property.id);
            request.agent = property.agent;
        }

        self.request_repository.create_request(request).await
    }

    #[instrument(skip(self, input), fields(template = template.name()))]
    async fn create_quote_request(
        &self,
        input: QuoteRequestInput,
        template: QuoteTemplate,
    ) -> Result<Request, CoreError> {
        ensure_contact(&input.name, &input.phone)?;

        let notification_phone = self.settings.notification_phone.clone().ok_or_else(|| {
            error!("Notification phone is not configured");
            CoreError::ExternalServiceError("notification phone is not configured".to_string())
        })?;

        let schedule = input
            .schedule
            .map(|schedule| schedule.as_str())
            .unwrap_or(UNSPECIFIED_SCHEDULE);
        let message = TemplateMessage::new(template.name(), QUOTE_LANGUAGE).with_body(vec![
            input.name.clone(),
            input.phone.clone(),
            schedule.to_string(),
        ]);

        self.notifier
            .send_template(notification_phone, message)
            .await?;

        let mut request = Request::new(RequestType::Appointment, input.name, input.phone);
        request.wsp_sent = true;

        let request = self.request_repository.create_request(request).await?;
        info!(request_id = %request.id, "Quote request recorded");

        Ok(request)
    }

    #[instrument(skip(self, identity, filter), fields(page = page.page))]
    async fn list_requests(
        &self,
        identity: Identity,
        filter: RequestFilter,
        page: PageRequest,
    ) -> Result<RequestPage, CoreError> {
        ensure_can_manage_requests(&identity)?;

        let total = self.request_repository.count(filter.clone()).await?;
        let requests = self.request_repository.find_page(filter, page).await?;

        Ok(RequestPage {
            requests,
            pagination: Pagination::from_request(total, page),
        })
    }

    async fn find_request(&self, identity: Identity, request_id: Uuid) -> Result<Request, CoreError> {
        ensure_can_manage_requests(&identity)?;

        self.request_repository
            .get_by_id(request_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, identity, input))]
    async fn update_request(
        &self,
        identity: Identity,
        request_id: Uuid,
        input: UpdateRequestInput,
    ) -> Result<Request, CoreError> {
        ensure_can_manage_requests(&identity)?;

        let mut request = self
            .request_repository
            .get_by_id(request_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        if let Some(name) = input.name {
            request.name = name;
        }
        if let Some(phone) = input.phone {
            request.phone = phone;
        }
        if let Some(scheduled_date) = input.scheduled_date {
            request.scheduled_date = Some(scheduled_date);
        }
        if let Some(status) = input.status {
            request.status = status;
        }
        if let Some(agent) = input.agent {
            request.agent = Some(agent);
        }
        request.updated_at = Utc::now();

        self.request_repository.update_request(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_support::{identity, listing, property_input, test_service},
        request::entities::{QuoteSchedule, RequestStatus},
    };

    fn quote(schedule: Option<QuoteSchedule>) -> QuoteRequestInput {
        QuoteRequestInput {
            name: "Jorge".to_string(),
            phone: "8119998877".to_string(),
            schedule,
        }
    }

    #[tokio::test]
    async fn test_request_copies_property_agent() {
        let service = test_service();
        let agent = Uuid::new_v4();
        let property = listing(agent, property_input("venta", 1.0, "Monterrey"), 0);
        service.property_repository.seed(vec![property.clone()]);

        let request = service
            .create_request(CreateRequestInput {
                request_type: RequestType::Information,
                name: "Ana".to_string(),
                phone: "8111111111".to_string(),
                scheduled_date: None,
                property: Some(property.id),
            })
            .await
            .unwrap();

        assert_eq!(request.agent, Some(agent));
        assert_eq!(request.property, Some(property.id));
        assert_eq!(request.status, RequestStatus::Pending);
    }

    #[tokio::test]
    async fn test_request_for_unknown_property() {
        let service = test_service();

        let result = service
            .create_request(CreateRequestInput {
                request_type: RequestType::Appointment,
                name: "Ana".to_string(),
                phone: "8111111111".to_string(),
                scheduled_date: None,
                property: Some(Uuid::new_v4()),
            })
            .await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_quote_sends_template_then_records_appointment() {
        let service = test_service();

        let request = service
            .create_quote_request(quote(None), QuoteTemplate::Conquistadores)
            .await
            .unwrap();

        let sent = service.notifier.sent.lock().unwrap().clone();
        assert_eq!(sent.len(), 1);
        let (to, message) = &sent[0];
        assert_eq!(to, "5218110000000");
        assert_eq!(message.name, "conqs_quote_request");
        assert_eq!(message.language, "es");
        assert_eq!(
            message.body_vars,
            vec!["Jorge", "8119998877", "sin especificar"]
        );

        assert_eq!(request.request_type, RequestType::Appointment);
        assert!(request.wsp_sent);
        assert_eq!(service.request_repository.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_demo_quote_uses_schedule() {
        let service = test_service();

        service
            .create_quote_request(quote(Some(QuoteSchedule::Weekend)), QuoteTemplate::InfoRequest)
            .await
            .unwrap();

        let sent = service.notifier.sent.lock().unwrap().clone();
        assert_eq!(sent[0].1.name, "info_request");
        assert_eq!(sent[0].1.body_vars[2], "fin de semana");
    }

    #[tokio::test]
    async fn test_quote_without_notification_phone() {
        let mut service = test_service();
        service.settings.notification_phone = None;

        let result = service
            .create_quote_request(quote(None), QuoteTemplate::Conquistadores)
            .await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
        assert!(service.request_repository.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_notification_records_nothing() {
        let service = test_service();
        *service.notifier.fail.lock().unwrap() = true;

        let result = service
            .create_quote_request(quote(None), QuoteTemplate::Conquistadores)
            .await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
        assert!(service.request_repository.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_quote_requires_name_and_phone() {
        let service = test_service();

        let result = service
            .create_quote_request(
                QuoteRequestInput {
                    name: String::new(),
                    phone: " ".to_string(),
                    schedule: None,
                },
                QuoteTemplate::InfoRequest,
            )
            .await;

        assert_eq!(
            result,
            Err(CoreError::InvalidInput(
                "missing required fields: name, phone".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_list_requests_paginates_for_editors() {
        let service = test_service();
        for i in 0..12 {
            service
                .create_request(CreateRequestInput {
                    request_type: RequestType::Information,
                    name: format!("Cliente {i}"),
                    phone: "8111111111".to_string(),
                    scheduled_date: None,
                    property: None,
                })
                .await
                .unwrap();
        }

        let denied = service
            .list_requests(identity(Role::User), RequestFilter::default(), PageRequest::default())
            .await;
        assert!(matches!(denied, Err(CoreError::Forbidden(_))));

        let page = service
            .list_requests(
                identity(Role::Editor),
                RequestFilter {
                    request_type: Some(RequestType::Information),
                    ..Default::default()
                },
                PageRequest::new(Some(2), Some(10)),
            )
            .await
            .unwrap();

        assert_eq!(page.requests.len(), 2);
        assert_eq!(page.pagination.total, 12);
        assert!(!page.pagination.has_next);
    }

    #[tokio::test]
    async fn test_update_request_status() {
        let service = test_service();
        let request = service
            .create_request(CreateRequestInput {
                request_type: RequestType::Appointment,
                name: "Ana".to_string(),
                phone: "8111111111".to_string(),
                scheduled_date: None,
                property: None,
            })
            .await
            .unwrap();

        let updated = service
            .update_request(
                identity(Role::Editor),
                request.id,
                UpdateRequestInput {
                    status: Some(RequestStatus::Confirmed),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, RequestStatus::Confirmed);
        assert_eq!(updated.name, "Ana");
    }
}
