mod inmemory;
mod postgres;

pub use inmemory::InMemoryListingRepo;
pub use postgres::PostgresListingRepo;
use seaboo_domain::{Listing, ID};

#[async_trait::async_trait]
pub trait IListingRepo: Send + Sync {
    async fn insert(&self, listing: &Listing) -> anyhow::Result<()>;
    async fn save(&self, listing: &Listing) -> anyhow::Result<()>;
    async fn find(&self, listing_id: &ID) -> Option<Listing>;
    /// All `Listing`s rented out by the given `User`
    async fn find_by_owner(&self, owner_id: &ID) -> Vec<Listing>;
    async fn delete(&self, listing_id: &ID) -> Option<Listing>;
}
