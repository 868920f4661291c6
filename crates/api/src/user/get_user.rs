use crate::{
    error::SeabooError,
    shared::auth::{account_can_modify_user, protect_account_route},
};
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::get_user::*;
use seaboo_infra::SeabooContext;

pub async fn get_user_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<SeabooContext>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;
    let user = account_can_modify_user(&account, &path_params.user_id, &ctx).await?;

    Ok(HttpResponse::Ok().json(APIResponse::new(user)))
}
