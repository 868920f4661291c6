mod cancel_booking;
mod complete_bookings;
mod create_booking;
mod expire_pending_bookings;
mod get_booking;
mod get_bookings;
mod respond_to_booking;
mod subscribers;

use actix_web::web;
use cancel_booking::{cancel_booking_admin_controller, cancel_booking_controller};
use create_booking::{create_booking_admin_controller, create_booking_controller};
use get_booking::{get_booking_admin_controller, get_booking_controller};
use get_bookings::{
    get_listing_bookings_admin_controller, get_listing_bookings_controller,
    get_my_bookings_controller, get_user_bookings_admin_controller,
};
use respond_to_booking::{
    confirm_booking_admin_controller, confirm_booking_controller,
    decline_booking_admin_controller, decline_booking_controller,
};

pub use complete_bookings::CompleteBookingsUseCase;
pub use expire_pending_bookings::ExpirePendingBookingsUseCase;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/listings/{listing_id}/bookings",
        web::post().to(create_booking_controller),
    );
    cfg.route(
        "/user/{user_id}/listings/{listing_id}/bookings",
        web::post().to(create_booking_admin_controller),
    );
    cfg.route(
        "/listings/{listing_id}/bookings",
        web::get().to(get_listing_bookings_controller),
    );
    cfg.route(
        "/user/listings/{listing_id}/bookings",
        web::get().to(get_listing_bookings_admin_controller),
    );

    cfg.route("/bookings", web::get().to(get_my_bookings_controller));
    cfg.route(
        "/user/{user_id}/bookings",
        web::get().to(get_user_bookings_admin_controller),
    );

    cfg.route(
        "/bookings/{booking_id}",
        web::get().to(get_booking_controller),
    );
    cfg.route(
        "/user/bookings/{booking_id}",
        web::get().to(get_booking_admin_controller),
    );

    cfg.route(
        "/bookings/{booking_id}/confirm",
        web::post().to(confirm_booking_controller),
    );
    cfg.route(
        "/user/bookings/{booking_id}/confirm",
        web::post().to(confirm_booking_admin_controller),
    );
    cfg.route(
        "/bookings/{booking_id}/decline",
        web::post().to(decline_booking_controller),
    );
    cfg.route(
        "/user/bookings/{booking_id}/decline",
        web::post().to(decline_booking_admin_controller),
    );
    cfg.route(
        "/bookings/{booking_id}/cancel",
        web::post().to(cancel_booking_controller),
    );
    cfg.route(
        "/user/bookings/{booking_id}/cancel",
        web::post().to(cancel_booking_admin_controller),
    );
}
