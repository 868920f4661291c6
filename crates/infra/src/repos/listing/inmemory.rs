use super::IListingRepo;
use crate::repos::shared::inmemory_repo::*;
use seaboo_domain::{Listing, ID};

pub struct InMemoryListingRepo {
    listings: std::sync::Mutex<Vec<Listing>>,
}

impl InMemoryListingRepo {
    pub fn new() -> Self {
        Self {
            listings: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IListingRepo for InMemoryListingRepo {
    async fn insert(&self, listing: &Listing) -> anyhow::Result<()> {
        insert(listing, &self.listings);
        Ok(())
    }

    async fn save(&self, listing: &Listing) -> anyhow::Result<()> {
        save(listing, &self.listings);
        Ok(())
    }

    async fn find(&self, listing_id: &ID) -> Option<Listing> {
        find(listing_id, &self.listings)
    }

    async fn find_by_owner(&self, owner_id: &ID) -> Vec<Listing> {
        find_by(&self.listings, |l| l.owner_id == *owner_id)
    }

    async fn delete(&self, listing_id: &ID) -> Option<Listing> {
        delete(listing_id, &self.listings)
    }
}
