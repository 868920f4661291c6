use crate::dtos::BookingDTO;
use seaboo_domain::{Booking, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking: BookingDTO,
}

impl BookingResponse {
    pub fn new(booking: Booking) -> Self {
        Self {
            booking: BookingDTO::new(booking),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub bookings: Vec<BookingDTO>,
}

impl BookingsResponse {
    pub fn new(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: bookings.into_iter().map(BookingDTO::new).collect(),
        }
    }
}

pub mod create_booking {
    use super::*;

    #[derive(Debug, Clone, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub start_date: String,
        pub end_date: String,
        pub guests: u32,
        /// Required when booking a mooring
        #[serde(default)]
        pub boat_length_cm: Option<u32>,
    }

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub listing_id: ID,
    }

    /// Admin route, the `User` is the customer
    #[derive(Debug, Deserialize)]
    pub struct AdminPathParams {
        pub user_id: ID,
        pub listing_id: ID,
    }

    pub type APIResponse = BookingResponse;
}

pub mod get_booking {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub booking_id: ID,
    }

    pub type APIResponse = BookingResponse;
}

pub mod get_listing_bookings {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub listing_id: ID,
    }

    /// Both dates have to be given to only get the bookings overlapping that range
    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub start_date: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub end_date: Option<String>,
    }

    pub type APIResponse = BookingsResponse;
}

pub mod get_my_bookings {
    use super::*;

    pub type APIResponse = BookingsResponse;
}

pub mod get_user_bookings {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type APIResponse = BookingsResponse;
}

pub mod confirm_booking {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub booking_id: ID,
    }

    pub type APIResponse = BookingResponse;
}

pub mod decline_booking {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub booking_id: ID,
    }

    pub type APIResponse = BookingResponse;
}

pub mod cancel_booking {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub booking_id: ID,
    }

    pub type APIResponse = BookingResponse;
}
