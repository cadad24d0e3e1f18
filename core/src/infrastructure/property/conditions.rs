//! Translation of a [`PropertyFilter`] into sea-query predicates.
//!
//! Count and data queries are both derived from [`property_condition`], so they always share
//! the same predicate set and bound values.

use sea_orm::{
    ColumnTrait, Condition, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect, Select,
    sea_query::{Expr, SimpleExpr},
};

use crate::domain::{
    common::pagination::PageRequest,
    property::value_objects::{OrderBy, OrderDirection, PropertyFilter, Proximity},
};
use crate::entity::properties::{Column as PropertyColumn, Entity as PropertyEntity};

/// Meters in a statute mile. `<@>` reports distances in miles.
const METERS_PER_MILE: f64 = 1609.344;

const SEARCH_DOCUMENT: &str = "to_tsvector('spanish', \
\"properties\".\"address\" || ' ' || \"properties\".\"description\" || ' ' || \
\"properties\".\"city\" || ' ' || \"properties\".\"state\" || ' ' || \
\"properties\".\"zip\" || ' ' || \"properties\".\"property_type\" || ' ' || \
\"properties\".\"contract\" || ' ' || \"properties\".\"nb_hood\" || ' ' || \
CAST(\"properties\".\"year_built\" AS TEXT) || ' ' || \
CAST(\"properties\".\"beds\" AS TEXT) || ' ' || \
CAST(\"properties\".\"baths\" AS TEXT)) @@ plainto_tsquery('spanish', $1)";

pub fn ids_expr(ids: Vec<uuid::Uuid>) -> SimpleExpr {
    Expr::cust_with_values("\"properties\".\"id\" = ANY($1)", [ids])
}

/// Earth distance in meters between the row and `(lon, lat)`.
pub fn distance_expr(lat: f64, lon: f64) -> SimpleExpr {
    Expr::cust_with_values(
        format!("(\"properties\".\"earth_coords\" <@> point($1, $2)) * {METERS_PER_MILE}"),
        [lon, lat],
    )
}

pub fn proximity_expr(proximity: Proximity) -> SimpleExpr {
    Expr::cust_with_values(
        format!("(\"properties\".\"earth_coords\" <@> point($1, $2)) * {METERS_PER_MILE} <= $3"),
        [proximity.lon, proximity.lat, proximity.radius_meters],
    )
}

pub fn text_search_expr(term: String) -> SimpleExpr {
    Expr::cust_with_values(SEARCH_DOCUMENT, [term])
}

/// One condition per populated field, appended in a fixed order and joined with `AND`.
pub fn property_condition(filter: &PropertyFilter) -> Condition {
    let mut condition = Condition::all();

    if !filter.ids.is_empty() {
        condition = condition.add(ids_expr(filter.ids.clone()));
    }

    if let Some(contract) = &filter.contract {
        condition = condition.add(PropertyColumn::Contract.eq(contract.as_str()));
    }

    if let Some(min_price) = filter.min_price {
        condition = condition.add(PropertyColumn::Price.gte(min_price));
    }
    if let Some(max_price) = filter.max_price {
        condition = condition.add(PropertyColumn::Price.lte(max_price));
    }

    if let Some(min_sq_mt) = filter.min_sq_mt {
        condition = condition.add(PropertyColumn::SquareMt.gte(min_sq_mt));
    }
    if let Some(max_sq_mt) = filter.max_sq_mt {
        condition = condition.add(PropertyColumn::SquareMt.lte(max_sq_mt));
    }

    if let Some(min_lot_size) = filter.min_lot_size {
        condition = condition.add(PropertyColumn::LotSize.gte(min_lot_size));
    }
    if let Some(max_lot_size) = filter.max_lot_size {
        condition = condition.add(PropertyColumn::LotSize.lte(max_lot_size));
    }

    if let Some(min_year) = filter.min_year_built {
        condition = condition.add(PropertyColumn::YearBuilt.gte(min_year));
    }
    if let Some(max_year) = filter.max_year_built {
        condition = condition.add(PropertyColumn::YearBuilt.lte(max_year));
    }

    if let Some(beds) = filter.beds {
        condition = condition.add(PropertyColumn::Beds.gte(beds));
    }
    if let Some(baths) = filter.baths {
        condition = condition.add(PropertyColumn::Baths.gte(baths));
    }

    let equalities = [
        (PropertyColumn::State, &filter.state),
        (PropertyColumn::City, &filter.city),
        (PropertyColumn::PropertyType, &filter.property_type),
        (PropertyColumn::Zip, &filter.zip),
        (PropertyColumn::NbHood, &filter.nb_hood),
    ];
    for (column, value) in equalities {
        if let Some(value) = value {
            condition = condition.add(column.eq(value.as_str()));
        }
    }

    if let Some(status) = filter.status {
        condition = condition.add(PropertyColumn::Status.eq(status.as_str()));
    }
    if let Some(featured) = filter.featured {
        condition = condition.add(PropertyColumn::Featured.eq(featured));
    }

    if let Some(proximity) = filter.proximity() {
        condition = condition.add(proximity_expr(proximity));
    }

    if let Some(text) = filter
        .text
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
    {
        condition = condition.add(text_search_expr(text.to_string()));
    }

    condition
}

fn order_column(order_by: OrderBy) -> PropertyColumn {
    match order_by {
        OrderBy::ListingDate => PropertyColumn::ListingDate,
        OrderBy::Price => PropertyColumn::Price,
        OrderBy::SquareMt => PropertyColumn::SquareMt,
        OrderBy::LotSize => PropertyColumn::LotSize,
    }
}

fn order(direction: OrderDirection) -> Order {
    match direction {
        OrderDirection::Asc => Order::Asc,
        OrderDirection::Desc => Order::Desc,
    }
}

/// `SELECT` restricted by the filter, without ordering or paging.
pub fn filtered_query(filter: &PropertyFilter) -> Select<PropertyEntity> {
    let condition = property_condition(filter);

    if condition.is_empty() {
        PropertyEntity::find()
    } else {
        PropertyEntity::find().filter(condition)
    }
}

/// Data query: predicates, then `ORDER BY <column>, id`, then `LIMIT`/`OFFSET`.
pub fn page_query(filter: &PropertyFilter, page: PageRequest) -> Select<PropertyEntity> {
    let direction = order(filter.order_direction);

    filtered_query(filter)
        .order_by(order_column(filter.order_by), direction.clone())
        .order_by(PropertyColumn::Id, direction)
        .limit(page.limit())
        .offset(page.offset())
}
