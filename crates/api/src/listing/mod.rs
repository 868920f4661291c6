mod create_listing;
mod delete_listing;
mod get_listing;
mod get_listings;
mod update_listing;

use actix_web::web;
use create_listing::{create_listing_admin_controller, create_listing_controller};
use delete_listing::{delete_listing_admin_controller, delete_listing_controller};
use get_listing::get_listing_controller;
use get_listings::{get_my_listings_controller, get_user_listings_admin_controller};
use update_listing::{update_listing_admin_controller, update_listing_controller};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/listings", web::post().to(create_listing_controller));
    cfg.route("/listings", web::get().to(get_my_listings_controller));
    cfg.route(
        "/user/{user_id}/listings",
        web::post().to(create_listing_admin_controller),
    );
    cfg.route(
        "/user/{user_id}/listings",
        web::get().to(get_user_listings_admin_controller),
    );

    cfg.route(
        "/listings/{listing_id}",
        web::get().to(get_listing_controller),
    );
    cfg.route(
        "/listings/{listing_id}",
        web::put().to(update_listing_controller),
    );
    cfg.route(
        "/user/listings/{listing_id}",
        web::put().to(update_listing_admin_controller),
    );
    cfg.route(
        "/listings/{listing_id}",
        web::delete().to(delete_listing_controller),
    );
    cfg.route(
        "/user/listings/{listing_id}",
        web::delete().to(delete_listing_admin_controller),
    );
}
