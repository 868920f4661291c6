use super::IReviewRepo;
use crate::repos::shared::inmemory_repo::*;
use seaboo_domain::{Review, ID};
use std::cmp::Reverse;

pub struct InMemoryReviewRepo {
    reviews: std::sync::Mutex<Vec<Review>>,
}

impl InMemoryReviewRepo {
    pub fn new() -> Self {
        Self {
            reviews: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReviewRepo for InMemoryReviewRepo {
    async fn insert(&self, review: &Review) -> anyhow::Result<bool> {
        let existing = insert_unless(review, &self.reviews, |reviews| {
            reviews.iter().find(|r| r.booking_id == review.booking_id).cloned()
        });
        Ok(existing.is_none())
    }

    async fn find_by_booking(&self, booking_id: &ID) -> Option<Review> {
        find_by(&self.reviews, |r| r.booking_id == *booking_id)
            .into_iter()
            .next()
    }

    async fn find_by_listing(&self, listing_id: &ID) -> Vec<Review> {
        let mut reviews = find_by(&self.reviews, |r| r.listing_id == *listing_id);
        reviews.sort_by_key(|r| Reverse(r.created));
        reviews
    }
}
