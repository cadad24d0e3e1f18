use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sibra_core::domain::{
    common::pagination::PageRequest,
    request::{
        entities::{QuoteSchedule, RequestStatus, RequestType},
        value_objects::{CreateRequestInput, QuoteRequestInput, RequestFilter, UpdateRequestInput},
    },
};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestValidator {
    #[serde(rename = "type")]
    pub request_type: RequestType,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,

    #[serde(default)]
    pub scheduled_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub property: Option<Uuid>,
}

impl From<CreateRequestValidator> for CreateRequestInput {
    fn from(value: CreateRequestValidator) -> Self {
        CreateRequestInput {
            request_type: value.request_type,
            name: value.name.trim().to_string(),
            phone: value.phone.trim().to_string(),
            scheduled_date: value.scheduled_date,
            property: value.property,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,

    #[serde(default)]
    pub quote_schedule: Option<QuoteSchedule>,
}

impl From<QuoteRequestValidator> for QuoteRequestInput {
    fn from(value: QuoteRequestValidator) -> Self {
        QuoteRequestInput {
            name: value.name.trim().to_string(),
            phone: value.phone.trim().to_string(),
            schedule: value.quote_schedule,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequestValidator {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "phone cannot be empty"))]
    pub phone: Option<String>,

    pub scheduled_date: Option<DateTime<Utc>>,

    pub status: Option<RequestStatus>,

    pub agent: Option<Uuid>,
}

impl From<UpdateRequestValidator> for UpdateRequestInput {
    fn from(value: UpdateRequestValidator) -> Self {
        UpdateRequestInput {
            name: value.name.map(|name| name.trim().to_string()),
            phone: value.phone.map(|phone| phone.trim().to_string()),
            scheduled_date: value.scheduled_date,
            status: value.status,
            agent: value.agent,
        }
    }
}

/// Query string of the request listing. Values that fail to parse are ignored.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RequestListQuery {
    /// `informacion` or `cita`
    #[serde(rename = "type")]
    pub request_type: Option<String>,
    /// `pendiente`, `confirmada`, `atendida` or `volver a atender`
    pub status: Option<String>,
    pub property: Option<String>,
    pub agent: Option<String>,
    /// Creation day, `YYYY-MM-DD`
    pub date: Option<String>,
    /// Scheduled day, `YYYY-MM-DD`
    pub scheduled_date: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|value| value.trim()).filter(|value| !value.is_empty())
}

fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|date| date.with_timezone(&Utc).date_naive())
        })
}

impl RequestListQuery {
    pub fn filter(&self) -> RequestFilter {
        RequestFilter {
            request_type: non_blank(self.request_type.as_ref()).and_then(|v| v.parse().ok()),
            status: non_blank(self.status.as_ref()).and_then(|v| v.parse().ok()),
            property: non_blank(self.property.as_ref()).and_then(|v| Uuid::parse_str(v).ok()),
            agent: non_blank(self.agent.as_ref()).and_then(|v| Uuid::parse_str(v).ok()),
            created_on: non_blank(self.date.as_ref()).and_then(parse_day),
            scheduled_on: non_blank(self.scheduled_date.as_ref()).and_then(parse_day),
        }
    }

    pub fn page(&self) -> PageRequest {
        PageRequest::new(
            non_blank(self.page.as_ref()).and_then(|v| v.parse().ok()),
            non_blank(self.per_page.as_ref()).and_then(|v| v.parse().ok()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_parses_known_values() {
        let query: RequestListQuery = serde_urlencoded::from_str(
            "type=cita&status=volver+a+atender&date=2025-03-01&page=2&perPage=20",
        )
        .unwrap();

        let filter = query.filter();
        assert_eq!(filter.request_type, Some(RequestType::Appointment));
        assert_eq!(filter.status, Some(RequestStatus::FollowUp));
        assert_eq!(filter.created_on, NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(query.page(), PageRequest::new(Some(2), Some(20)));
    }

    #[test]
    fn test_list_query_ignores_garbage() {
        let query: RequestListQuery = serde_urlencoded::from_str(
            "type=visita&status=&property=nope&scheduledDate=ayer&page=-3",
        )
        .unwrap();

        assert_eq!(query.filter(), RequestFilter::default());
        assert_eq!(query.page(), PageRequest::default());
    }

    #[test]
    fn test_scheduled_day_accepts_timestamps() {
        let query = RequestListQuery {
            scheduled_date: Some("2025-03-01T18:30:00-06:00".to_string()),
            ..Default::default()
        };

        assert_eq!(query.filter().scheduled_on, NaiveDate::from_ymd_opt(2025, 3, 2));
    }

    #[test]
    fn test_create_request_wire_format() {
        let payload: CreateRequestValidator = serde_json::from_str(
            r#"{"type":"informacion","name":" Marta ","phone":"8110000000","scheduledDate":null}"#,
        )
        .unwrap();

        assert!(payload.validate().is_ok());
        let input: CreateRequestInput = payload.into();
        assert_eq!(input.request_type, RequestType::Information);
        assert_eq!(input.name, "Marta");
        assert_eq!(input.property, None);
    }

    #[test]
    fn test_quote_schedule_wire_values() {
        let payload: QuoteRequestValidator = serde_json::from_str(
            r#"{"name":"Marta","phone":"8110000000","quoteSchedule":"fin de semana"}"#,
        )
        .unwrap();

        assert_eq!(payload.quote_schedule, Some(QuoteSchedule::Weekend));
        assert!(
            serde_json::from_str::<QuoteRequestValidator>(
                r#"{"name":"Marta","phone":"1","quoteSchedule":"lunes"}"#
            )
            .is_err()
        );
    }

    #[test]
    fn test_update_rejects_blank_name() {
        let payload = UpdateRequestValidator {
            name: Some(String::new()),
            ..Default::default()
        };

        assert!(payload.validate().is_err());
    }
}
