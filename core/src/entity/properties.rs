use sea_orm::entity::prelude::*;

/// `earth_coords` is generated by the database and never read or written here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub address: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub nb_hood: String,
    pub country: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub property_type: String,
    pub contract: String,
    pub beds: i32,
    pub baths: i32,
    #[sea_orm(column_type = "Double")]
    pub square_mt: f64,
    #[sea_orm(column_type = "Double")]
    pub lot_size: f64,
    pub listing_date: DateTimeWithTimeZone,
    pub year_built: i32,
    pub status: String,
    #[sea_orm(column_type = "Double")]
    pub lat: f64,
    #[sea_orm(column_type = "Double")]
    pub lon: f64,
    #[sea_orm(column_type = "JsonBinary")]
    pub features: Json,
    pub featured: bool,
    pub featured_expires_at: Option<DateTimeWithTimeZone>,
    pub main_img: String,
    pub imgs: Vec<String>,
    pub agent: Option<Uuid>,
    #[sea_orm(unique)]
    pub slug: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::Agent",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Users,
    #[sea_orm(has_many = "super::requests::Entity")]
    Requests,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Requests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
