use crate::{APIResponse, BaseClient, ID};
use reqwest::StatusCode;
use seaboo_api_structs::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct AvailabilityClient {
    base: Arc<BaseClient>,
}

pub struct GetAvailabilityInput {
    pub listing_id: ID,
    /// Dates are formatted as `YYYY-MM-DD`
    pub start_date: String,
    pub end_date: String,
}

pub struct CreateBlockInput {
    pub listing_id: ID,
    pub start_date: String,
    pub end_date: String,
    pub note: Option<String>,
}

impl AvailabilityClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn calendar(
        &self,
        input: GetAvailabilityInput,
    ) -> APIResponse<get_listing_availability::APIResponse> {
        let query = get_listing_availability::QueryParams {
            start_date: input.start_date,
            end_date: input.end_date,
        };
        self.base
            .get_with_query(
                format!("listings/{}/availability", input.listing_id),
                &query,
                StatusCode::OK,
            )
            .await
    }

    pub async fn create_block(
        &self,
        input: CreateBlockInput,
    ) -> APIResponse<create_availability_block::APIResponse> {
        let body = create_availability_block::RequestBody {
            start_date: input.start_date,
            end_date: input.end_date,
            note: input.note,
        };
        self.base
            .post(
                body,
                format!("listings/{}/blocks", input.listing_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn create_block_as_admin(
        &self,
        input: CreateBlockInput,
    ) -> APIResponse<create_availability_block::APIResponse> {
        let body = create_availability_block::RequestBody {
            start_date: input.start_date,
            end_date: input.end_date,
            note: input.note,
        };
        self.base
            .post(
                body,
                format!("user/listings/{}/blocks", input.listing_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn blocks(&self, listing_id: ID) -> APIResponse<get_availability_blocks::APIResponse> {
        self.base
            .get(format!("listings/{}/blocks", listing_id), StatusCode::OK)
            .await
    }

    pub async fn blocks_as_admin(
        &self,
        listing_id: ID,
    ) -> APIResponse<get_availability_blocks::APIResponse> {
        self.base
            .get(format!("user/listings/{}/blocks", listing_id), StatusCode::OK)
            .await
    }

    pub async fn delete_block(
        &self,
        listing_id: ID,
        block_id: ID,
    ) -> APIResponse<delete_availability_block::APIResponse> {
        self.base
            .delete(
                format!("listings/{}/blocks/{}", listing_id, block_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete_block_as_admin(
        &self,
        listing_id: ID,
        block_id: ID,
    ) -> APIResponse<delete_availability_block::APIResponse> {
        self.base
            .delete(
                format!("user/listings/{}/blocks/{}", listing_id, block_id),
                StatusCode::OK,
            )
            .await
    }
}
