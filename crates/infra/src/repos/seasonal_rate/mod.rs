mod inmemory;
mod postgres;

pub use inmemory::InMemorySeasonalRateRepo;
pub use postgres::PostgresSeasonalRateRepo;
use seaboo_domain::{SeasonalRate, ID};

#[async_trait::async_trait]
pub trait ISeasonalRateRepo: Send + Sync {
    async fn insert(&self, rate: &SeasonalRate) -> anyhow::Result<()>;
    async fn find(&self, rate_id: &ID) -> Option<SeasonalRate>;
    async fn delete(&self, rate_id: &ID) -> Option<SeasonalRate>;
    /// Rates of a `Listing` ordered by start date
    async fn find_by_listing(&self, listing_id: &ID) -> Vec<SeasonalRate>;
    async fn delete_by_listing(&self, listing_id: &ID) -> anyhow::Result<u64>;
}

#[cfg(test)]
mod tests {
    use crate::{setup_context, SeabooContext};
    use seaboo_domain::{
        Account, DateRange, Listing, ListingKind, NaiveDate, SeasonalRate, User,
    };

    async fn create_contexts() -> Vec<SeabooContext> {
        vec![SeabooContext::create_inmemory(), setup_context().await]
    }

    fn range(start_month: u32, end_month: u32) -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2025, start_month, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, end_month, 1).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn crud() {
        for ctx in create_contexts().await {
            let account = Account::default();
            ctx.repos.accounts.insert(&account).await.unwrap();
            let owner = User::new(account.id.clone());
            ctx.repos.users.insert(&owner).await.unwrap();
            let listing = Listing::new(
                account.id.clone(),
                owner.id.clone(),
                "Dufour 390".into(),
                ListingKind::Boat { max_guests: 8 },
                20_000,
                "EUR".into(),
                0,
            )
            .unwrap();
            ctx.repos.listings.insert(&listing).await.unwrap();

            let august = SeasonalRate::new(&listing, "August".into(), range(8, 9), 40_000, 1).unwrap();
            let summer = SeasonalRate::new(&listing, "Summer".into(), range(6, 9), 30_000, 2).unwrap();
            ctx.repos.rates.insert(&august).await.unwrap();
            ctx.repos.rates.insert(&summer).await.unwrap();

            assert_eq!(
                ctx.repos.rates.find_by_listing(&listing.id).await,
                vec![summer.clone(), august.clone()]
            );
            assert_eq!(ctx.repos.rates.find(&august.id).await, Some(august.clone()));
            assert_eq!(
                ctx.repos.rates.delete(&august.id).await,
                Some(august.clone())
            );
            assert!(ctx.repos.rates.find(&august.id).await.is_none());
            assert_eq!(
                ctx.repos.rates.delete_by_listing(&listing.id).await.unwrap(),
                1
            );
            assert!(ctx.repos.rates.find_by_listing(&listing.id).await.is_empty());
        }
    }
}
