mod create_availability_block;
mod delete_availability_block;
mod get_availability_blocks;
mod get_listing_availability;

use actix_web::web;
use create_availability_block::{
    create_availability_block_admin_controller, create_availability_block_controller,
};
use delete_availability_block::{
    delete_availability_block_admin_controller, delete_availability_block_controller,
};
use get_availability_blocks::{
    get_availability_blocks_admin_controller, get_availability_blocks_controller,
};
use get_listing_availability::get_listing_availability_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/listings/{listing_id}/availability",
        web::get().to(get_listing_availability_controller),
    );

    cfg.route(
        "/listings/{listing_id}/blocks",
        web::post().to(create_availability_block_controller),
    );
    cfg.route(
        "/user/listings/{listing_id}/blocks",
        web::post().to(create_availability_block_admin_controller),
    );
    cfg.route(
        "/listings/{listing_id}/blocks",
        web::get().to(get_availability_blocks_controller),
    );
    cfg.route(
        "/user/listings/{listing_id}/blocks",
        web::get().to(get_availability_blocks_admin_controller),
    );
    cfg.route(
        "/listings/{listing_id}/blocks/{block_id}",
        web::delete().to(delete_availability_block_controller),
    );
    cfg.route(
        "/user/listings/{listing_id}/blocks/{block_id}",
        web::delete().to(delete_availability_block_admin_controller),
    );
}
