mod account;
mod availability;
mod booking;
mod helpers;
mod listing;
mod pricing;
mod review;
mod status;
mod user;

pub mod dtos {
    pub use crate::account::dtos::*;
    pub use crate::availability::dtos::*;
    pub use crate::booking::dtos::*;
    pub use crate::listing::dtos::*;
    pub use crate::pricing::dtos::*;
    pub use crate::review::dtos::*;
    pub use crate::user::dtos::*;
}

pub use crate::account::api::*;
pub use crate::availability::api::*;
pub use crate::booking::api::*;
pub use crate::listing::api::*;
pub use crate::pricing::api::*;
pub use crate::review::api::*;
pub use crate::status::api::*;
pub use crate::user::api::*;
