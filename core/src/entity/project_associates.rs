use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "project_associates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub project_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub associate_id: Uuid,
    pub pending_payment: bool,
    pub lot_num: String,
    pub apple_num: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Projects,
    #[sea_orm(
        belongs_to = "super::associates::Entity",
        from = "Column::AssociateId",
        to = "super::associates::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Associates,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<super::associates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Associates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
