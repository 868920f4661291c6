use crate::dtos::ListingDTO;
use crate::helpers::deserialize_some;
use seaboo_domain::{
    BookingRules, CancellationPolicy, Discount, DiscountStacking, Listing, ListingKind, Metadata,
    ID,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub listing: ListingDTO,
}

impl ListingResponse {
    pub fn new(listing: Listing) -> Self {
        Self {
            listing: ListingDTO::new(listing),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingsResponse {
    pub listings: Vec<ListingDTO>,
}

impl ListingsResponse {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings: listings.into_iter().map(ListingDTO::new).collect(),
        }
    }
}

pub mod create_listing {
    use super::*;

    #[derive(Debug, Clone, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub kind: ListingKind,
        pub base_price: i64,
        pub currency: String,
        #[serde(default)]
        pub timezone: Option<String>,
        #[serde(default)]
        pub weekend_price: Option<i64>,
        #[serde(default)]
        pub cleaning_fee: Option<i64>,
        #[serde(default)]
        pub rules: Option<BookingRules>,
        #[serde(default)]
        pub discounts: Option<Vec<Discount>>,
        #[serde(default)]
        pub stacking: Option<DiscountStacking>,
        #[serde(default)]
        pub cancellation_policy: Option<CancellationPolicy>,
        #[serde(default)]
        pub metadata: Option<Metadata>,
    }

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type APIResponse = ListingResponse;
}

pub mod get_listing {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub listing_id: ID,
    }

    pub type APIResponse = ListingResponse;
}

pub mod get_user_listings {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type APIResponse = ListingsResponse;
}

pub mod get_my_listings {
    use super::*;

    pub type APIResponse = ListingsResponse;
}

pub mod update_listing {
    use super::*;

    /// Only the given fields are changed
    #[derive(Debug, Clone, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub kind: Option<ListingKind>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub timezone: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub currency: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub base_price: Option<i64>,
        /// `null` removes the weekend price
        #[serde(
            default,
            deserialize_with = "deserialize_some",
            skip_serializing_if = "Option::is_none"
        )]
        pub weekend_price: Option<Option<i64>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub cleaning_fee: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub rules: Option<BookingRules>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub discounts: Option<Vec<Discount>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub stacking: Option<DiscountStacking>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub cancellation_policy: Option<CancellationPolicy>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub active: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub metadata: Option<Metadata>,
    }

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub listing_id: ID,
    }

    pub type APIResponse = ListingResponse;
}

pub mod delete_listing {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub listing_id: ID,
    }

    pub type APIResponse = ListingResponse;
}
