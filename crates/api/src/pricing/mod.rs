mod create_seasonal_rate;
mod delete_seasonal_rate;
mod get_price_quote;
mod get_seasonal_rates;

use actix_web::web;
use create_seasonal_rate::{create_seasonal_rate_admin_controller, create_seasonal_rate_controller};
use delete_seasonal_rate::{delete_seasonal_rate_admin_controller, delete_seasonal_rate_controller};
use get_price_quote::get_price_quote_controller;
use get_seasonal_rates::get_seasonal_rates_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/listings/{listing_id}/rates",
        web::post().to(create_seasonal_rate_controller),
    );
    cfg.route(
        "/user/listings/{listing_id}/rates",
        web::post().to(create_seasonal_rate_admin_controller),
    );
    cfg.route(
        "/listings/{listing_id}/rates",
        web::get().to(get_seasonal_rates_controller),
    );
    cfg.route(
        "/listings/{listing_id}/rates/{rate_id}",
        web::delete().to(delete_seasonal_rate_controller),
    );
    cfg.route(
        "/user/listings/{listing_id}/rates/{rate_id}",
        web::delete().to(delete_seasonal_rate_admin_controller),
    );

    cfg.route(
        "/listings/{listing_id}/quote",
        web::get().to(get_price_quote_controller),
    );
}
