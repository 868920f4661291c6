use crate::{APIResponse, BaseClient, ID};
use reqwest::StatusCode;
use seaboo_api_structs::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct PricingClient {
    base: Arc<BaseClient>,
}

pub type CreateSeasonalRateInput = create_seasonal_rate::RequestBody;

impl PricingClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create_rate(
        &self,
        listing_id: ID,
        input: CreateSeasonalRateInput,
    ) -> APIResponse<create_seasonal_rate::APIResponse> {
        self.base
            .post(
                input,
                format!("listings/{}/rates", listing_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn create_rate_as_admin(
        &self,
        listing_id: ID,
        input: CreateSeasonalRateInput,
    ) -> APIResponse<create_seasonal_rate::APIResponse> {
        self.base
            .post(
                input,
                format!("user/listings/{}/rates", listing_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn rates(&self, listing_id: ID) -> APIResponse<get_seasonal_rates::APIResponse> {
        self.base
            .get(format!("listings/{}/rates", listing_id), StatusCode::OK)
            .await
    }

    pub async fn delete_rate(
        &self,
        listing_id: ID,
        rate_id: ID,
    ) -> APIResponse<delete_seasonal_rate::APIResponse> {
        self.base
            .delete(
                format!("listings/{}/rates/{}", listing_id, rate_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete_rate_as_admin(
        &self,
        listing_id: ID,
        rate_id: ID,
    ) -> APIResponse<delete_seasonal_rate::APIResponse> {
        self.base
            .delete(
                format!("user/listings/{}/rates/{}", listing_id, rate_id),
                StatusCode::OK,
            )
            .await
    }

    /// `start_date` and `end_date` are formatted as `YYYY-MM-DD`
    pub async fn quote(
        &self,
        listing_id: ID,
        start_date: &str,
        end_date: &str,
    ) -> APIResponse<get_price_quote::APIResponse> {
        let query = get_price_quote::QueryParams {
            start_date: start_date.into(),
            end_date: end_date.into(),
        };
        self.base
            .get_with_query(
                format!("listings/{}/quote", listing_id),
                &query,
                StatusCode::OK,
            )
            .await
    }
}
