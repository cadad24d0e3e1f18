use sea_orm::ActiveValue::Set;

use crate::domain::associate::entities::{Associate, ProjectAssociate};
use crate::entity::{
    associates::{ActiveModel as AssociateActiveModel, Model as AssociateModel},
    project_associates::Model as ProjectAssociateModel,
};

impl From<AssociateModel> for Associate {
    fn from(model: AssociateModel) -> Self {
        Associate {
            id: model.id,
            name: model.name,
            phone: model.phone,
            rfc: model.rfc,
            curp: model.curp,
        }
    }
}

impl From<Associate> for AssociateActiveModel {
    fn from(associate: Associate) -> Self {
        AssociateActiveModel {
            id: Set(associate.id),
            name: Set(associate.name),
            phone: Set(associate.phone),
            rfc: Set(associate.rfc),
            curp: Set(associate.curp),
        }
    }
}

pub fn project_associate(link: ProjectAssociateModel, associate: AssociateModel) -> ProjectAssociate {
    ProjectAssociate::new(
        Associate::from(associate),
        link.lot_num,
        link.apple_num,
        link.pending_payment,
    )
}
