use chrono::{DateTime, Days, NaiveDate, Utc};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, Select};

use crate::domain::request::value_objects::RequestFilter;
use crate::entity::requests::{Column as RequestColumn, Entity as RequestEntity};

/// `[start, end)` bounds of a UTC calendar day.
fn day_bounds(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = day.and_time(chrono::NaiveTime::MIN).and_utc();
    let end = day
        .checked_add_days(Days::new(1))
        .map(|next| next.and_time(chrono::NaiveTime::MIN).and_utc())
        .unwrap_or(DateTime::<Utc>::MAX_UTC);

    (start, end)
}

fn within_day(condition: Condition, column: RequestColumn, day: NaiveDate) -> Condition {
    let (start, end) = day_bounds(day);

    condition
        .add(column.gte(start.fixed_offset()))
        .add(column.lt(end.fixed_offset()))
}

pub fn request_condition(filter: &RequestFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(request_type) = filter.request_type {
        condition = condition.add(RequestColumn::RequestType.eq(request_type.as_str()));
    }
    if let Some(status) = filter.status {
        condition = condition.add(RequestColumn::Status.eq(status.as_str()));
    }
    if let Some(property) = filter.property {
        condition = condition.add(RequestColumn::Property.eq(property));
    }
    if let Some(agent) = filter.agent {
        condition = condition.add(RequestColumn::Agent.eq(agent));
    }
    if let Some(day) = filter.created_on {
        condition = within_day(condition, RequestColumn::CreatedAt, day);
    }
    if let Some(day) = filter.scheduled_on {
        condition = within_day(condition, RequestColumn::ScheduledDate, day);
    }

    condition
}

pub fn filtered_query(filter: &RequestFilter) -> Select<RequestEntity> {
    let condition = request_condition(filter);

    if condition.is_empty() {
        RequestEntity::find()
    } else {
        RequestEntity::find().filter(condition)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};

    use super::*;
    use crate::domain::request::entities::{RequestStatus, RequestType};

    #[test]
    fn test_empty_filter() {
        let sql = filtered_query(&RequestFilter::default())
            .build(DbBackend::Postgres)
            .sql;
        assert!(!sql.contains("WHERE"));
    }

    #[test]
    fn test_placeholders_are_numbered_in_order() {
        let filter = RequestFilter {
            request_type: Some(RequestType::Appointment),
            status: Some(RequestStatus::FollowUp),
            created_on: NaiveDate::from_ymd_opt(2025, 5, 20),
            ..Default::default()
        };

        let statement = filtered_query(&filter).build(DbBackend::Postgres);
        assert!(statement.sql.contains(
            r#"WHERE "requests"."type" = $1 AND "requests"."status" = $2 AND "requests"."created_at" >= $3 AND "requests"."created_at" < $4"#
        ));
        assert_eq!(statement.values.unwrap().0.len(), 4);
    }

    #[test]
    fn test_day_bounds_cover_whole_day() {
        let (start, end) = day_bounds(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());

        assert_eq!(start.to_rfc3339(), "2025-12-31T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2026-01-01T00:00:00+00:00");
    }
}
