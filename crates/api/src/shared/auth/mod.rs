mod policy;
mod route_guards;

pub use policy::{Permission, Policy};
pub use route_guards::{
    account_can_modify_booking, account_can_modify_listing, account_can_modify_user,
    protect_account_route, protect_public_account_route, protect_route, user_can_modify_listing,
    Claims, ACCOUNT_HEADER, API_KEY_HEADER,
};
