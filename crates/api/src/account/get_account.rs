use crate::{error::SeabooError, shared::auth::protect_account_route};
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::get_account::APIResponse;
use seaboo_infra::SeabooContext;

pub async fn get_account_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;

    Ok(HttpResponse::Ok().json(APIResponse::new(account)))
}
