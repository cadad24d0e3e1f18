#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociateInput {
    pub name: String,
    pub phone: String,
    pub rfc: String,
    pub curp: String,
}

/// Lot data attached to an associate within a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociateLinkInput {
    pub lot_num: String,
    pub apple_num: String,
    pub pending_payment: bool,
}

/// An associate created together with its project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProjectAssociate {
    pub associate: AssociateInput,
    pub link: AssociateLinkInput,
}
