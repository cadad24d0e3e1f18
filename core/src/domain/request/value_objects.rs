use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::entities::{QuoteSchedule, RequestStatus, RequestType};

pub const QUOTE_LANGUAGE: &str = "es";
pub const UNSPECIFIED_SCHEDULE: &str = "sin especificar";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequestInput {
    pub request_type: RequestType,
    pub name: String,
    pub phone: String,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub property: Option<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequestInput {
    pub name: String,
    pub phone: String,
    pub schedule: Option<QuoteSchedule>,
}

/// Message templates registered with the messaging provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteTemplate {
    /// Public quote form of the Conquistadores development.
    Conquistadores,
    /// Demo requests made from the panel.
    InfoRequest,
}

impl QuoteTemplate {
    pub fn name(&self) -> &'static str {
        match self {
            QuoteTemplate::Conquistadores => "conqs_quote_request",
            QuoteTemplate::InfoRequest => "info_request",
        }
    }
}

/// Dates match whole calendar days in UTC.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFilter {
    pub request_type: Option<RequestType>,
    pub status: Option<RequestStatus>,
    pub property: Option<Uuid>,
    pub agent: Option<Uuid>,
    pub created_on: Option<NaiveDate>,
    pub scheduled_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateRequestInput {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub status: Option<RequestStatus>,
    pub agent: Option<Uuid>,
}
