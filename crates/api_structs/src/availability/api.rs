use crate::dtos::{AvailabilityBlockDTO, AvailabilityCalendarDTO};
use seaboo_domain::{AvailabilityBlock, AvailabilityCalendar, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityBlockResponse {
    pub block: AvailabilityBlockDTO,
}

impl AvailabilityBlockResponse {
    pub fn new(block: AvailabilityBlock) -> Self {
        Self {
            block: AvailabilityBlockDTO::new(block),
        }
    }
}

pub mod get_listing_availability {
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
        pub availability: AvailabilityCalendarDTO,
    }

    impl APIResponse {
        pub fn new(listing_id: ID, calendar: AvailabilityCalendar) -> Self {
            Self {
                listing_id,
                availability: AvailabilityCalendarDTO::new(calendar),
            }
        }
    }
}

pub mod create_availability_block {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub start_date: String,
        pub end_date: String,
        #[serde(default)]
        pub note: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub listing_id: ID,
    }

    pub type APIResponse = AvailabilityBlockResponse;
}

pub mod get_availability_blocks {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub listing_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub blocks: Vec<AvailabilityBlockDTO>,
    }

    impl APIResponse {
        pub fn new(blocks: Vec<AvailabilityBlock>) -> Self {
            Self {
                blocks: blocks.into_iter().map(AvailabilityBlockDTO::new).collect(),
            }
        }
    }
}

pub mod delete_availability_block {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub listing_id: ID,
        pub block_id: ID,
    }

    pub type APIResponse = AvailabilityBlockResponse;
}
