use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{
    entities::app_errors::CoreError, generate_uuid_v7, pagination::Pagination,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RequestType {
    #[serde(rename = "informacion")]
    Information,
    #[serde(rename = "cita")]
    Appointment,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Information => "informacion",
            RequestType::Appointment => "cita",
        }
    }
}

impl FromStr for RequestType {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "informacion" => Ok(RequestType::Information),
            "cita" => Ok(RequestType::Appointment),
            other => Err(CoreError::InvalidInput(format!("unknown request type: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum RequestStatus {
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "confirmada")]
    Confirmed,
    #[serde(rename = "atendida")]
    Done,
    #[serde(rename = "volver a atender")]
    FollowUp,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pendiente",
            RequestStatus::Confirmed => "confirmada",
            RequestStatus::Done => "atendida",
            RequestStatus::FollowUp => "volver a atender",
        }
    }
}

impl FromStr for RequestStatus {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pendiente" => Ok(RequestStatus::Pending),
            "confirmada" => Ok(RequestStatus::Confirmed),
            "atendida" => Ok(RequestStatus::Done),
            "volver a atender" => Ok(RequestStatus::FollowUp),
            other => Err(CoreError::InvalidInput(format!(
                "unknown request status: {other}"
            ))),
        }
    }
}

/// When a prospect prefers to be contacted about a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum QuoteSchedule {
    #[serde(rename = "fin de semana")]
    Weekend,
    #[serde(rename = "entre semana")]
    Weekday,
    #[serde(rename = "otro")]
    Other,
}

impl QuoteSchedule {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteSchedule::Weekend => "fin de semana",
            QuoteSchedule::Weekday => "entre semana",
            QuoteSchedule::Other => "otro",
        }
    }
}

/// A lead or appointment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub phone: String,
    pub name: String,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub status: RequestStatus,
    pub agent: Option<Uuid>,
    pub property: Option<Uuid>,
    pub wsp_sent: bool,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Request {
    pub fn new(request_type: RequestType, name: String, phone: String) -> Self {
        let now = Utc::now();

        Self {
            id: generate_uuid_v7(),
            request_type,
            phone,
            name,
            scheduled_date: None,
            status: RequestStatus::Pending,
            agent: None,
            property: None,
            wsp_sent: false,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RequestPage {
    pub requests: Vec<Request>,
    pub pagination: Pagination,
}
