use crate::{APIResponse, BaseClient, ID};
use reqwest::StatusCode;
use seaboo_api_structs::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReviewClient {
    base: Arc<BaseClient>,
}

impl ReviewClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        booking_id: ID,
        rating: u8,
        comment: Option<String>,
    ) -> APIResponse<create_review::APIResponse> {
        let body = create_review::RequestBody { rating, comment };
        self.base
            .post(
                body,
                format!("bookings/{}/review", booking_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn by_listing(&self, listing_id: ID) -> APIResponse<get_listing_reviews::APIResponse> {
        self.base
            .get(format!("listings/{}/reviews", listing_id), StatusCode::OK)
            .await
    }
}
