use crate::dtos::ReviewDTO;
use seaboo_domain::{RatingSummary, Review, ID};
use serde::{Deserialize, Serialize};

pub mod create_review {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub rating: u8,
        #[serde(default)]
        pub comment: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub booking_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub review: ReviewDTO,
    }

    impl APIResponse {
        pub fn new(review: Review) -> Self {
            Self {
                review: ReviewDTO::new(review),
            }
        }
    }
}

pub mod get_listing_reviews {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub listing_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub summary: RatingSummary,
        pub reviews: Vec<ReviewDTO>,
    }

    impl APIResponse {
        pub fn new(reviews: Vec<Review>) -> Self {
            Self {
                summary: RatingSummary::from_reviews(&reviews),
                reviews: reviews.into_iter().map(ReviewDTO::new).collect(),
            }
        }
    }
}
