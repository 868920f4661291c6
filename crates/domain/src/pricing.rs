use crate::{
    date::days_between,
    shared::entity::{Entity, ID},
    DateRange, Listing,
};
use chrono::{Datelike, NaiveDate, Weekday};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const BASIS_POINTS: i64 = 10_000;
/// Highest nightly price or fee in minor currency units
pub const MAX_PRICE: i64 = 10_000_000_000;

/// A nightly price that overrides the base price of a `Listing` for a
/// period, e.g. high season in July and August.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalRate {
    pub id: ID,
    pub account_id: ID,
    pub listing_id: ID,
    pub name: String,
    pub range: DateRange,
    pub nightly_price: i64,
    pub created: i64,
}

impl SeasonalRate {
    pub fn new(
        listing: &Listing,
        name: String,
        range: DateRange,
        nightly_price: i64,
        created: i64,
    ) -> Result<Self, PricingError> {
        if !(1..=MAX_PRICE).contains(&nightly_price) {
            return Err(PricingError::Price(nightly_price));
        }
        Ok(Self {
            id: Default::default(),
            account_id: listing.account_id.clone(),
            listing_id: listing.id.clone(),
            name,
            range,
            nightly_price,
            created,
        })
    }
}

impl Entity for SeasonalRate {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    #[error("Price has to be between 1 and {}, got: {0}", MAX_PRICE)]
    Price(i64),
    #[error("Discount percentage has to be between 1 and 100, got: {0}")]
    InvalidPercentage(u32),
    #[error("Invalid discount condition: {0}")]
    InvalidCondition(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DiscountKind {
    /// Stays of at least `min_nights` nights, e.g. weekly and monthly rates
    LengthOfStay {
        #[serde(rename = "minNights")]
        min_nights: i64,
    },
    /// Bookings made at least `min_days_before` days before check-in
    EarlyBird {
        #[serde(rename = "minDaysBefore")]
        min_days_before: i64,
    },
    /// Bookings made at most `max_days_before` days before check-in
    LastMinute {
        #[serde(rename = "maxDaysBefore")]
        max_days_before: i64,
    },
}

impl DiscountKind {
    fn category(&self) -> u8 {
        match self {
            Self::LengthOfStay { .. } => 0,
            Self::EarlyBird { .. } => 1,
            Self::LastMinute { .. } => 2,
        }
    }

    fn is_eligible(&self, nights: i64, days_before: i64) -> bool {
        match *self {
            Self::LengthOfStay { min_nights } => nights >= min_nights,
            Self::EarlyBird { min_days_before } => days_before >= min_days_before,
            Self::LastMinute { max_days_before } => days_before <= max_days_before,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub kind: DiscountKind,
    pub percentage: u32,
}

impl Discount {
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.percentage == 0 || self.percentage > 100 {
            return Err(PricingError::InvalidPercentage(self.percentage));
        }
        match self.kind {
            DiscountKind::LengthOfStay { min_nights } if min_nights < 2 => Err(
                PricingError::InvalidCondition("length of stay discounts start at 2 nights".into()),
            ),
            DiscountKind::EarlyBird { min_days_before } if min_days_before < 1 => Err(
                PricingError::InvalidCondition("early bird discounts need at least 1 day".into()),
            ),
            DiscountKind::LastMinute { max_days_before } if max_days_before < 0 => Err(
                PricingError::InvalidCondition("last minute window can not be negative".into()),
            ),
            _ => Ok(()),
        }
    }
}

/// How multiple eligible discounts combine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DiscountStacking {
    /// Only the single largest discount applies
    BestOnly,
    /// Percentages are summed, up to `max_percentage`
    Additive {
        #[serde(rename = "maxPercentage")]
        max_percentage: u32,
    },
    /// Discounts apply one after the other on the remaining price,
    /// up to `max_percentage` in total
    Compound {
        #[serde(rename = "maxPercentage")]
        max_percentage: u32,
    },
}

impl Default for DiscountStacking {
    fn default() -> Self {
        Self::BestOnly
    }
}

impl DiscountStacking {
    pub fn validate(&self) -> Result<(), PricingError> {
        match *self {
            Self::BestOnly => Ok(()),
            Self::Additive { max_percentage } | Self::Compound { max_percentage } => {
                if max_percentage == 0 || max_percentage > 100 {
                    Err(PricingError::InvalidPercentage(max_percentage))
                } else {
                    Ok(())
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PriceSource {
    Base,
    Weekend,
    Seasonal {
        #[serde(rename = "rateId")]
        rate_id: ID,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NightlyPrice {
    pub date: NaiveDate,
    pub price: i64,
    pub source: PriceSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub currency: String,
    pub nights: Vec<NightlyPrice>,
    pub subtotal: i64,
    pub applied_discounts: Vec<Discount>,
    pub discount_basis_points: i64,
    pub discount_amount: i64,
    pub cleaning_fee: i64,
    pub total: i64,
}

fn is_weekend_night(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Fri | Weekday::Sat)
}

/// Price of a single night. The most specific seasonal rate wins (fewest nights,
/// then the most recently created), then the weekend price on Friday and Saturday
/// nights, then the base price.
pub fn nightly_price(listing: &Listing, rates: &[SeasonalRate], date: NaiveDate) -> NightlyPrice {
    let seasonal = rates
        .iter()
        .filter(|rate| rate.listing_id == listing.id && rate.range.contains(date))
        .min_by(|a, b| {
            a.range
                .nights()
                .cmp(&b.range.nights())
                .then(b.created.cmp(&a.created))
        });

    if let Some(rate) = seasonal {
        return NightlyPrice {
            date,
            price: rate.nightly_price,
            source: PriceSource::Seasonal {
                rate_id: rate.id.clone(),
            },
        };
    }

    match listing.weekend_price {
        Some(weekend_price) if is_weekend_night(date) => NightlyPrice {
            date,
            price: weekend_price,
            source: PriceSource::Weekend,
        },
        _ => NightlyPrice {
            date,
            price: listing.base_price,
            source: PriceSource::Base,
        },
    }
}

/// Picks the eligible discounts, keeping only the best one of each kind.
/// Weekly and monthly tiers are both `LengthOfStay`, so they never add up.
fn eligible_discounts(discounts: &[Discount], nights: i64, days_before: i64) -> Vec<Discount> {
    discounts
        .iter()
        .filter(|d| d.kind.is_eligible(nights, days_before))
        .sorted_by(|a, b| b.percentage.cmp(&a.percentage))
        .unique_by(|d| d.kind.category())
        .cloned()
        .collect()
}

/// Combines eligible discounts into an effective discount in basis points
fn stack_discounts(
    eligible: Vec<Discount>,
    stacking: &DiscountStacking,
) -> (Vec<Discount>, i64) {
    if eligible.is_empty() {
        return (eligible, 0);
    }
    match *stacking {
        DiscountStacking::BestOnly => {
            // Sorted by percentage descending
            let best = eligible[0].clone();
            let basis_points = best.percentage as i64 * 100;
            (vec![best], basis_points)
        }
        DiscountStacking::Additive { max_percentage } => {
            let sum: i64 = eligible.iter().map(|d| d.percentage as i64 * 100).sum();
            (eligible, sum.min(max_percentage as i64 * 100))
        }
        DiscountStacking::Compound { max_percentage } => {
            let remaining = eligible.iter().fold(BASIS_POINTS, |remaining, d| {
                remaining * (100 - d.percentage as i64) / 100
            });
            let basis_points = BASIS_POINTS - remaining;
            (eligible, basis_points.min(max_percentage as i64 * 100))
        }
    }
}

/// Quotes the price of a stay on a `Listing` booked at `today`.
///
/// Discounts only apply to the sum of the nightly prices, the cleaning fee is
/// always charged in full. Discount amounts are rounded down to a whole minor
/// currency unit.
pub fn quote(
    listing: &Listing,
    rates: &[SeasonalRate],
    range: &DateRange,
    today: NaiveDate,
) -> PriceQuote {
    let nights = range
        .nights_iter()
        .map(|date| nightly_price(listing, rates, date))
        .collect::<Vec<_>>();
    let subtotal: i64 = nights.iter().map(|n| n.price).sum();

    let days_before = days_between(today, range.start());
    let eligible = eligible_discounts(&listing.discounts, range.nights(), days_before);
    let (applied_discounts, discount_basis_points) = stack_discounts(eligible, &listing.stacking);
    let discount_amount =
        (subtotal as i128 * discount_basis_points as i128 / BASIS_POINTS as i128) as i64;

    PriceQuote {
        currency: listing.currency.clone(),
        nights,
        subtotal,
        applied_discounts,
        discount_basis_points,
        discount_amount,
        cleaning_fee: listing.cleaning_fee,
        total: subtotal - discount_amount + listing.cleaning_fee,
    }
}
