use crate::dtos::SeasonalRateDTO;
use seaboo_domain::{PriceQuote, SeasonalRate, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalRateResponse {
    pub rate: SeasonalRateDTO,
}

impl SeasonalRateResponse {
    pub fn new(rate: SeasonalRate) -> Self {
        Self {
            rate: SeasonalRateDTO::new(rate),
        }
    }
}

pub mod create_seasonal_rate {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub start_date: String,
        pub end_date: String,
        pub nightly_price: i64,
    }

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub listing_id: ID,
    }

    pub type APIResponse = SeasonalRateResponse;
}

pub mod get_seasonal_rates {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub listing_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub rates: Vec<SeasonalRateDTO>,
    }

    impl APIResponse {
        pub fn new(rates: Vec<SeasonalRate>) -> Self {
            Self {
                rates: rates.into_iter().map(SeasonalRateDTO::new).collect(),
            }
        }
    }
}

pub mod delete_seasonal_rate {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub listing_id: ID,
        pub rate_id: ID,
    }

    pub type APIResponse = SeasonalRateResponse;
}

pub mod get_price_quote {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub listing_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub start_date: String,
        pub end_date: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub listing_id: ID,
        pub quote: PriceQuote,
    }

    impl APIResponse {
        pub fn new(listing_id: ID, quote: PriceQuote) -> Self {
            Self { listing_id, quote }
        }
    }
}
