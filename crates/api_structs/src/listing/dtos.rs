use seaboo_domain::{
    BookingRules, CancellationPolicy, Discount, DiscountStacking, Listing, ListingKind, Metadata,
    Tz, ID,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDTO {
    pub id: ID,
    pub account_id: ID,
    pub owner_id: ID,
    pub name: String,
    pub kind: ListingKind,
    pub timezone: Tz,
    pub currency: String,
    pub base_price: i64,
    pub weekend_price: Option<i64>,
    pub cleaning_fee: i64,
    pub rules: BookingRules,
    pub discounts: Vec<Discount>,
    pub stacking: DiscountStacking,
    pub cancellation_policy: CancellationPolicy,
    pub active: bool,
    pub metadata: Metadata,
    pub created: i64,
    pub updated: i64,
}

impl ListingDTO {
    pub fn new(listing: Listing) -> Self {
        Self {
            id: listing.id,
            account_id: listing.account_id,
            owner_id: listing.owner_id,
            name: listing.name,
            kind: listing.kind,
            timezone: listing.timezone,
            currency: listing.currency,
            base_price: listing.base_price,
            weekend_price: listing.weekend_price,
            cleaning_fee: listing.cleaning_fee,
            rules: listing.rules,
            discounts: listing.discounts,
            stacking: listing.stacking,
            cancellation_policy: listing.cancellation_policy,
            active: listing.active,
            metadata: listing.metadata,
            created: listing.created,
            updated: listing.updated,
        }
    }
}
