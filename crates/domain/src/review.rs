use crate::{
    shared::entity::{Entity, ID},
    Booking, BookingStatus,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MAX_COMMENT_LEN: usize = 2000;

/// A customer's review of a `Listing` after a completed stay
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: ID,
    pub account_id: ID,
    pub booking_id: ID,
    pub listing_id: ID,
    pub author_id: ID,
    /// 1 to 5 stars
    pub rating: u8,
    pub comment: Option<String>,
    pub created: i64,
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidReview {
    #[error("Rating has to be between 1 and 5")]
    Rating,
    #[error("Comment can be at most {} characters", MAX_COMMENT_LEN)]
    CommentTooLong,
    #[error("Only the customer of the booking can review it")]
    NotCustomer,
    #[error("Only completed stays can be reviewed")]
    NotCompleted,
}

impl Review {
    pub fn new(
        booking: &Booking,
        author_id: ID,
        rating: u8,
        comment: Option<String>,
        created: i64,
    ) -> Result<Self, InvalidReview> {
        if booking.customer_id != author_id {
            return Err(InvalidReview::NotCustomer);
        }
        if booking.status != BookingStatus::Completed {
            return Err(InvalidReview::NotCompleted);
        }
        if !(1..=5).contains(&rating) {
            return Err(InvalidReview::Rating);
        }
        let comment = comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        if matches!(&comment, Some(c) if c.chars().count() > MAX_COMMENT_LEN) {
            return Err(InvalidReview::CommentTooLong);
        }

        Ok(Self {
            id: Default::default(),
            account_id: booking.account_id.clone(),
            booking_id: booking.id.clone(),
            listing_id: booking.listing_id.clone(),
            author_id,
            rating,
            comment,
            created,
        })
    }
}

impl Entity for Review {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub count: usize,
    /// Rounded to two decimals, `None` without reviews
    pub average: Option<f64>,
}

impl RatingSummary {
    pub fn from_reviews(reviews: &[Review]) -> Self {
        if reviews.is_empty() {
            return Self {
                count: 0,
                average: None,
            };
        }
        let sum: u64 = reviews.iter().map(|r| r.rating as u64).sum();
        let average = sum as f64 / reviews.len() as f64;
        Self {
            count: reviews.len(),
            average: Some((average * 100.0).round() / 100.0),
        }
    }
}
