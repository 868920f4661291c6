use crate::{APIResponse, BaseClient, ID};
use reqwest::StatusCode;
use seaboo_api_structs::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct ListingClient {
    base: Arc<BaseClient>,
}

pub type CreateListingInput = create_listing::RequestBody;
pub type UpdateListingInput = update_listing::RequestBody;

impl ListingClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Creates a `Listing` owned by the signed in user
    pub async fn create(&self, input: CreateListingInput) -> APIResponse<create_listing::APIResponse> {
        self.base
            .post(input, "listings".into(), StatusCode::CREATED)
            .await
    }

    pub async fn create_for_user(
        &self,
        owner_id: ID,
        input: CreateListingInput,
    ) -> APIResponse<create_listing::APIResponse> {
        self.base
            .post(input, format!("user/{}/listings", owner_id), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, listing_id: ID) -> APIResponse<get_listing::APIResponse> {
        self.base
            .get(format!("listings/{}", listing_id), StatusCode::OK)
            .await
    }

    pub async fn mine(&self) -> APIResponse<get_my_listings::APIResponse> {
        self.base.get("listings".into(), StatusCode::OK).await
    }

    pub async fn by_owner(&self, owner_id: ID) -> APIResponse<get_user_listings::APIResponse> {
        self.base
            .get(format!("user/{}/listings", owner_id), StatusCode::OK)
            .await
    }

    pub async fn update(
        &self,
        listing_id: ID,
        input: UpdateListingInput,
    ) -> APIResponse<update_listing::APIResponse> {
        self.base
            .put(input, format!("listings/{}", listing_id), StatusCode::OK)
            .await
    }

    pub async fn update_as_admin(
        &self,
        listing_id: ID,
        input: UpdateListingInput,
    ) -> APIResponse<update_listing::APIResponse> {
        self.base
            .put(input, format!("user/listings/{}", listing_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, listing_id: ID) -> APIResponse<delete_listing::APIResponse> {
        self.base
            .delete(format!("listings/{}", listing_id), StatusCode::OK)
            .await
    }

    pub async fn delete_as_admin(&self, listing_id: ID) -> APIResponse<delete_listing::APIResponse> {
        self.base
            .delete(format!("user/listings/{}", listing_id), StatusCode::OK)
            .await
    }
}
