mod inmemory;
mod postgres;

pub use inmemory::InMemoryReviewRepo;
pub use postgres::PostgresReviewRepo;
use seaboo_domain::{Review, ID};

#[async_trait::async_trait]
pub trait IReviewRepo: Send + Sync {
    /// Stores the `Review` unless its booking was reviewed already, in which
    /// case nothing is stored and `false` is returned
    async fn insert(&self, review: &Review) -> anyhow::Result<bool>;
    async fn find_by_booking(&self, booking_id: &ID) -> Option<Review>;
    /// Reviews of a `Listing`, newest first
    async fn find_by_listing(&self, listing_id: &ID) -> Vec<Review>;
}

#[cfg(test)]
mod tests {
    use crate::{setup_context, SeabooContext};
    use seaboo_domain::{
        pricing, Account, Booking, BookingParty, DateRange, Listing, ListingKind, NaiveDate,
        Review, User,
    };

    async fn create_contexts() -> Vec<SeabooContext> {
        vec![SeabooContext::create_inmemory(), setup_context().await]
    }

    #[tokio::test]
    async fn insert_and_find() {
        for ctx in create_contexts().await {
            let account = Account::default();
            ctx.repos.accounts.insert(&account).await.unwrap();
            let owner = User::new(account.id.clone());
            ctx.repos.users.insert(&owner).await.unwrap();
            let customer = User::new(account.id.clone());
            ctx.repos.users.insert(&customer).await.unwrap();
            let listing = Listing::new(
                account.id.clone(),
                owner.id.clone(),
                "Elan 45".into(),
                ListingKind::Boat { max_guests: 8 },
                35_000,
                "EUR".into(),
                0,
            )
            .unwrap();
            ctx.repos.listings.insert(&listing).await.unwrap();

            let mut reviews = vec![];
            for (i, week) in [1, 8].iter().enumerate() {
                let start = NaiveDate::from_ymd_opt(2024, 6, *week).unwrap();
                let range = DateRange::new(start, start + chrono::Duration::days(7)).unwrap();
                let quote = pricing::quote(&listing, &[], &range, start);
                let mut booking = Booking::new(
                    &listing,
                    customer.id.clone(),
                    range,
                    BookingParty {
                        guests: 4,
                        boat_length_cm: None,
                    },
                    &quote,
                    0,
                    1000,
                );
                booking.confirm(1).unwrap();
                booking.complete(2).unwrap();
                ctx.repos
                    .bookings
                    .insert_if_available(&booking, &[])
                    .await
                    .unwrap();

                let review = Review::new(
                    &booking,
                    customer.id.clone(),
                    5 - i as u8,
                    Some("Fair winds".into()),
                    10 + i as i64,
                )
                .unwrap();
                assert!(ctx.repos.reviews.insert(&review).await.unwrap());
                assert_eq!(
                    ctx.repos.reviews.find_by_booking(&booking.id).await,
                    Some(review.clone())
                );

                let second = Review::new(&booking, customer.id.clone(), 1, None, 20).unwrap();
                assert!(!ctx.repos.reviews.insert(&second).await.unwrap());
                assert_eq!(
                    ctx.repos.reviews.find_by_booking(&booking.id).await,
                    Some(review.clone())
                );
                reviews.push(review);
            }

            reviews.reverse();
            assert_eq!(ctx.repos.reviews.find_by_listing(&listing.id).await, reviews);
            assert!(ctx
                .repos
                .reviews
                .find_by_listing(&account.id)
                .await
                .is_empty());
        }
    }
}
