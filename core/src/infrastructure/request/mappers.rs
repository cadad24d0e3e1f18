use chrono::Utc;
use sea_orm::ActiveValue::Set;

use crate::domain::request::entities::{Request, RequestStatus, RequestType};
use crate::entity::requests::{ActiveModel as RequestActiveModel, Model as RequestModel};

impl From<RequestModel> for Request {
    fn from(model: RequestModel) -> Self {
        Request {
            id: model.id,
            request_type: model
                .request_type
                .parse()
                .unwrap_or(RequestType::Information),
            phone: model.phone,
            name: model.name,
            scheduled_date: model.scheduled_date.map(|dt| dt.with_timezone(&Utc)),
            status: model.status.parse().unwrap_or(RequestStatus::Pending),
            agent: model.agent,
            property: model.property,
            wsp_sent: model.wsp_sent,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<Request> for RequestActiveModel {
    fn from(request: Request) -> Self {
        RequestActiveModel {
            id: Set(request.id),
            request_type: Set(request.request_type.as_str().to_string()),
            phone: Set(request.phone),
            name: Set(request.name),
            scheduled_date: Set(request.scheduled_date.map(|dt| dt.fixed_offset())),
            status: Set(request.status.as_str().to_string()),
            agent: Set(request.agent),
            property: Set(request.property),
            wsp_sent: Set(request.wsp_sent),
            created_at: Set(request.created_at.fixed_offset()),
            updated_at: Set(request.updated_at.fixed_offset()),
        }
    }
}
