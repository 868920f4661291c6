use seaboo_domain::{Review, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDTO {
    pub id: ID,
    pub booking_id: ID,
    pub listing_id: ID,
    pub author_id: ID,
    pub rating: u8,
    pub comment: Option<String>,
    pub created: i64,
}

impl ReviewDTO {
    pub fn new(review: Review) -> Self {
        Self {
            id: review.id,
            booking_id: review.booking_id,
            listing_id: review.listing_id,
            author_id: review.author_id,
            rating: review.rating,
            comment: review.comment,
            created: review.created,
        }
    }
}
