mod inmemory;
mod postgres;

pub use inmemory::InMemoryAvailabilityBlockRepo;
pub use postgres::PostgresAvailabilityBlockRepo;
use seaboo_domain::{AvailabilityBlock, DateRange, ID};

#[async_trait::async_trait]
pub trait IAvailabilityBlockRepo: Send + Sync {
    async fn insert(&self, block: &AvailabilityBlock) -> anyhow::Result<()>;
    async fn find(&self, block_id: &ID) -> Option<AvailabilityBlock>;
    async fn delete(&self, block_id: &ID) -> Option<AvailabilityBlock>;
    /// Blocks of a `Listing`, optionally only those overlapping `range`,
    /// ordered by start date
    async fn find_by_listing(
        &self,
        listing_id: &ID,
        range: Option<&DateRange>,
    ) -> Vec<AvailabilityBlock>;
    async fn delete_by_listing(&self, listing_id: &ID) -> anyhow::Result<u64>;
}

#[cfg(test)]
mod tests {
    use crate::{setup_context, SeabooContext};
    use seaboo_domain::{
        Account, AvailabilityBlock, DateRange, Listing, ListingKind, NaiveDate, User,
    };

    async fn create_contexts() -> Vec<SeabooContext> {
        vec![SeabooContext::create_inmemory(), setup_context().await]
    }

    fn range(start: u32, end: u32) -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 9, start).unwrap(),
            NaiveDate::from_ymd_opt(2024, 9, end).unwrap(),
        )
        .unwrap()
    }

    async fn insert_listing(ctx: &SeabooContext) -> Listing {
        let account = Account::default();
        ctx.repos.accounts.insert(&account).await.unwrap();
        let owner = User::new(account.id.clone());
        ctx.repos.users.insert(&owner).await.unwrap();
        let listing = Listing::new(
            account.id.clone(),
            owner.id.clone(),
            "Berth A3".into(),
            ListingKind::Mooring {
                max_boat_length_cm: 1000,
            },
            2_500,
            "EUR".into(),
            0,
        )
        .unwrap();
        ctx.repos.listings.insert(&listing).await.unwrap();
        listing
    }

    #[tokio::test]
    async fn finds_blocks_overlapping_range() {
        for ctx in create_contexts().await {
            let listing = insert_listing(&ctx).await;
            let late = AvailabilityBlock::new(&listing, range(20, 25), None, 1);
            let early = AvailabilityBlock::new(&listing, range(1, 5), Some("Antifouling".into()), 2);
            ctx.repos.blocks.insert(&late).await.unwrap();
            ctx.repos.blocks.insert(&early).await.unwrap();

            assert_eq!(
                ctx.repos.blocks.find_by_listing(&listing.id, None).await,
                vec![early.clone(), late.clone()]
            );
            assert_eq!(
                ctx.repos
                    .blocks
                    .find_by_listing(&listing.id, Some(&range(4, 10)))
                    .await,
                vec![early.clone()]
            );
            // Touching ranges do not overlap
            assert!(ctx
                .repos
                .blocks
                .find_by_listing(&listing.id, Some(&range(5, 20)))
                .await
                .is_empty());

            assert_eq!(ctx.repos.blocks.find(&late.id).await, Some(late.clone()));
            assert_eq!(ctx.repos.blocks.delete(&late.id).await, Some(late.clone()));
            assert!(ctx.repos.blocks.find(&late.id).await.is_none());

            assert_eq!(
                ctx.repos
                    .blocks
                    .delete_by_listing(&listing.id)
                    .await
                    .unwrap(),
                1
            );
            assert!(ctx
                .repos
                .blocks
                .find_by_listing(&listing.id, None)
                .await
                .is_empty());
        }
    }
}
