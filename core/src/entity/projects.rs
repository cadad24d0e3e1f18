use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub main_img: String,
    pub availability_img: String,
    pub gallery: Vec<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub amenities: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub docs: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_associates::Entity")]
    ProjectAssociates,
}

impl Related<super::project_associates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectAssociates.def()
    }
}

impl Related<super::associates::Entity> for Entity {
    fn to() -> RelationDef {
        super::project_associates::Relation::Associates.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::project_associates::Relation::Projects.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
