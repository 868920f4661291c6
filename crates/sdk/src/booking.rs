use crate::{APIResponse, BaseClient, ID};
use reqwest::StatusCode;
use seaboo_api_structs::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct BookingClient {
    base: Arc<BaseClient>,
}

pub type CreateBookingInput = create_booking::RequestBody;
pub type BookingsQuery = get_listing_bookings::QueryParams;

impl BookingClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Requests a stay as the signed in user
    pub async fn create(
        &self,
        listing_id: ID,
        input: CreateBookingInput,
    ) -> APIResponse<create_booking::APIResponse> {
        self.base
            .post(
                input,
                format!("listings/{}/bookings", listing_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn create_for_user(
        &self,
        customer_id: ID,
        listing_id: ID,
        input: CreateBookingInput,
    ) -> APIResponse<create_booking::APIResponse> {
        self.base
            .post(
                input,
                format!("user/{}/listings/{}/bookings", customer_id, listing_id),
                StatusCode::CREATED,
            )
            .await
    }

    pub async fn get(&self, booking_id: ID) -> APIResponse<get_booking::APIResponse> {
        self.base
            .get(format!("bookings/{}", booking_id), StatusCode::OK)
            .await
    }

    pub async fn get_as_admin(&self, booking_id: ID) -> APIResponse<get_booking::APIResponse> {
        self.base
            .get(format!("user/bookings/{}", booking_id), StatusCode::OK)
            .await
    }

    pub async fn by_listing(
        &self,
        listing_id: ID,
        query: BookingsQuery,
    ) -> APIResponse<get_listing_bookings::APIResponse> {
        self.base
            .get_with_query(
                format!("listings/{}/bookings", listing_id),
                &query,
                StatusCode::OK,
            )
            .await
    }

    pub async fn by_listing_as_admin(
        &self,
        listing_id: ID,
        query: BookingsQuery,
    ) -> APIResponse<get_listing_bookings::APIResponse> {
        self.base
            .get_with_query(
                format!("user/listings/{}/bookings", listing_id),
                &query,
                StatusCode::OK,
            )
            .await
    }

    pub async fn mine(&self) -> APIResponse<get_my_bookings::APIResponse> {
        self.base.get("bookings".into(), StatusCode::OK).await
    }

    pub async fn by_customer(&self, customer_id: ID) -> APIResponse<get_user_bookings::APIResponse> {
        self.base
            .get(format!("user/{}/bookings", customer_id), StatusCode::OK)
            .await
    }

    pub async fn confirm(&self, booking_id: ID) -> APIResponse<confirm_booking::APIResponse> {
        self.transition(format!("bookings/{}/confirm", booking_id))
            .await
    }

    pub async fn confirm_as_admin(
        &self,
        booking_id: ID,
    ) -> APIResponse<confirm_booking::APIResponse> {
        self.transition(format!("user/bookings/{}/confirm", booking_id))
            .await
    }

    pub async fn decline(&self, booking_id: ID) -> APIResponse<decline_booking::APIResponse> {
        self.transition(format!("bookings/{}/decline", booking_id))
            .await
    }

    pub async fn decline_as_admin(
        &self,
        booking_id: ID,
    ) -> APIResponse<decline_booking::APIResponse> {
        self.transition(format!("user/bookings/{}/decline", booking_id))
            .await
    }

    pub async fn cancel(&self, booking_id: ID) -> APIResponse<cancel_booking::APIResponse> {
        self.transition(format!("bookings/{}/cancel", booking_id))
            .await
    }

    pub async fn cancel_as_admin(
        &self,
        booking_id: ID,
    ) -> APIResponse<cancel_booking::APIResponse> {
        self.transition(format!("user/bookings/{}/cancel", booking_id))
            .await
    }

    async fn transition(&self, path: String) -> APIResponse<BookingResponse> {
        self.base.post((), path, StatusCode::OK).await
    }
}
