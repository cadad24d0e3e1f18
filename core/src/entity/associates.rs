use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "associates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub rfc: String,
    pub curp: String,
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

impl ActiveModelBehavior for ActiveModel {}
