mod create_review;
mod get_listing_reviews;

use actix_web::web;
use create_review::create_review_controller;
use get_listing_reviews::get_listing_reviews_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/bookings/{booking_id}/review",
        web::post().to(create_review_controller),
    );
    cfg.route(
        "/listings/{listing_id}/reviews",
        web::get().to(get_listing_reviews_controller),
    );
}
