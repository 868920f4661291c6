use crate::{
    shared::entity::{Entity, ID},
    BookingRules, CancellationPolicy, Discount, DiscountStacking, Meta, Metadata, MAX_PRICE,
};
use chrono_tz::{Tz, UTC};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What is being rented out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ListingKind {
    Boat {
        #[serde(rename = "maxGuests")]
        max_guests: u32,
    },
    /// A berth in a marina, rented without a boat
    Mooring {
        #[serde(rename = "maxBoatLengthCm")]
        max_boat_length_cm: u32,
    },
}

/// Who is coming. Boats care about the number of guests, moorings
/// about the length of the boat that is going to be moored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingParty {
    pub guests: u32,
    pub boat_length_cm: Option<u32>,
}

#[derive(Debug, Error, PartialEq)]
pub enum PartyMismatch {
    #[error("At least one guest is required")]
    NoGuests,
    #[error("The boat takes at most {0} guests")]
    TooManyGuests(u32),
    #[error("The length of the boat is required to book a mooring")]
    MissingBoatLength,
    #[error("The mooring takes boats up to {0} cm")]
    BoatTooLong(u32),
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidListing {
    #[error("Name can not be empty")]
    EmptyName,
    #[error("Price has to be between 1 and {}", MAX_PRICE)]
    Price,
    #[error("Cleaning fee has to be between 0 and {}", MAX_PRICE)]
    CleaningFee,
    #[error("Currency: {0} should be a three letter ISO 4217 code")]
    Currency(String),
    #[error("Timezone: {0} is not a valid IANA timezone")]
    Timezone(String),
    #[error("Capacity has to be positive")]
    Capacity,
}

/// A boat or a mooring that an owner rents out
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: ID,
    pub account_id: ID,
    /// The `User` renting out this `Listing`
    pub owner_id: ID,
    pub name: String,
    pub kind: ListingKind,
    /// Timezone of the marina. Decides what "today" means for booking rules
    pub timezone: Tz,
    pub currency: String,
    /// Nightly price in minor currency units
    pub base_price: i64,
    /// Nightly price for Friday and Saturday nights
    pub weekend_price: Option<i64>,
    /// Charged once per booking
    pub cleaning_fee: i64,
    pub rules: BookingRules,
    pub discounts: Vec<Discount>,
    pub stacking: DiscountStacking,
    pub cancellation_policy: CancellationPolicy,
    /// Inactive listings are hidden from new bookings
    pub active: bool,
    pub metadata: Metadata,
    pub created: i64,
    pub updated: i64,
}

impl Listing {
    pub fn new(
        account_id: ID,
        owner_id: ID,
        name: String,
        kind: ListingKind,
        base_price: i64,
        currency: String,
        created: i64,
    ) -> Result<Self, InvalidListing> {
        let mut listing = Self {
            id: Default::default(),
            account_id,
            owner_id,
            name: String::new(),
            kind: ListingKind::Boat { max_guests: 1 },
            timezone: UTC,
            currency: String::new(),
            base_price: 1,
            weekend_price: None,
            cleaning_fee: 0,
            rules: Default::default(),
            discounts: Vec::new(),
            stacking: Default::default(),
            cancellation_policy: Default::default(),
            active: true,
            metadata: Default::default(),
            created,
            updated: created,
        };
        listing.set_name(name)?;
        listing.set_kind(kind)?;
        listing.set_base_price(base_price)?;
        listing.set_currency(&currency)?;
        Ok(listing)
    }

    pub fn set_name(&mut self, name: String) -> Result<(), InvalidListing> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(InvalidListing::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    pub fn set_kind(&mut self, kind: ListingKind) -> Result<(), InvalidListing> {
        match kind {
            ListingKind::Boat { max_guests: 0 } => Err(InvalidListing::Capacity),
            ListingKind::Mooring {
                max_boat_length_cm: 0,
            } => Err(InvalidListing::Capacity),
            _ => {
                self.kind = kind;
                Ok(())
            }
        }
    }

    pub fn set_base_price(&mut self, price: i64) -> Result<(), InvalidListing> {
        if !(1..=MAX_PRICE).contains(&price) {
            return Err(InvalidListing::Price);
        }
        self.base_price = price;
        Ok(())
    }

    pub fn set_weekend_price(&mut self, price: Option<i64>) -> Result<(), InvalidListing> {
        if matches!(price, Some(p) if !(1..=MAX_PRICE).contains(&p)) {
            return Err(InvalidListing::Price);
        }
        self.weekend_price = price;
        Ok(())
    }

    pub fn set_cleaning_fee(&mut self, fee: i64) -> Result<(), InvalidListing> {
        if !(0..=MAX_PRICE).contains(&fee) {
            return Err(InvalidListing::CleaningFee);
        }
        self.cleaning_fee = fee;
        Ok(())
    }

    pub fn set_currency(&mut self, currency: &str) -> Result<(), InvalidListing> {
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(InvalidListing::Currency(currency.to_string()));
        }
        self.currency = currency.to_string();
        Ok(())
    }

    pub fn set_timezone(&mut self, timezone: &str) -> Result<(), InvalidListing> {
        match timezone.parse::<Tz>() {
            Ok(tz) => {
                self.timezone = tz;
                Ok(())
            }
            Err(_) => Err(InvalidListing::Timezone(timezone.to_string())),
        }
    }

    pub fn is_owned_by(&self, user_id: &ID) -> bool {
        self.owner_id == *user_id
    }

    /// Checks that the party fits on the boat or in the mooring
    pub fn accommodates(&self, party: &BookingParty) -> Result<(), PartyMismatch> {
        if party.guests == 0 {
            return Err(PartyMismatch::NoGuests);
        }
        match self.kind {
            ListingKind::Boat { max_guests } => {
                if party.guests > max_guests {
                    return Err(PartyMismatch::TooManyGuests(max_guests));
                }
            }
            ListingKind::Mooring { max_boat_length_cm } => match party.boat_length_cm {
                None => return Err(PartyMismatch::MissingBoatLength),
                Some(length) if length > max_boat_length_cm => {
                    return Err(PartyMismatch::BoatTooLong(max_boat_length_cm))
                }
                Some(_) => (),
            },
        }
        Ok(())
    }
}

impl Entity for Listing {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Meta for Listing {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
    fn account_id(&self) -> &ID {
        &self.account_id
    }
}
