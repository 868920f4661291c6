use crate::{
    shared::entity::{Entity, ID},
    Meta, Metadata,
};

/// Anyone using the marketplace. A `User` is an owner relative to the
/// `Listing`s it rents out and a customer relative to the `Booking`s it makes.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: ID,
    pub account_id: ID,
    pub metadata: Metadata,
}

impl User {
    pub fn new(account_id: ID) -> Self {
        Self {
            id: Default::default(),
            account_id,
            metadata: Default::default(),
        }
    }
}

impl Entity for User {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Meta for User {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
    fn account_id(&self) -> &ID {
        &self.account_id
    }
}
