use crate::{error::SeabooError, shared::auth::protect_route};
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::get_me::*;
use seaboo_infra::SeabooContext;

pub async fn get_me_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
) -> Result<HttpResponse, SeabooError> {
    let (user, _) = protect_route(&http_req, &ctx).await?;

    Ok(HttpResponse::Ok().json(APIResponse::new(user)))
}
