use seaboo_domain::{NaiveDate, SeasonalRate, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalRateDTO {
    pub id: ID,
    pub listing_id: ID,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub nightly_price: i64,
    pub created: i64,
}

impl SeasonalRateDTO {
    pub fn new(rate: SeasonalRate) -> Self {
        Self {
            id: rate.id,
            listing_id: rate.listing_id,
            name: rate.name,
            start_date: rate.range.start(),
            end_date: rate.range.end(),
            nightly_price: rate.nightly_price,
            created: rate.created,
        }
    }
}
