use super::set_account_webhook::SetAccountWebhookUseCase;
use crate::{
    error::SeabooError,
    shared::{auth::protect_account_route, usecase::execute},
};
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::delete_account_webhook::APIResponse;
use seaboo_infra::SeabooContext;

pub async fn delete_account_webhook_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;

    let usecase = SetAccountWebhookUseCase {
        account,
        webhook_url: None,
    };

    execute(usecase, &ctx)
        .await
        .map(|account| HttpResponse::Ok().json(APIResponse::new(account)))
        .map_err(SeabooError::from)
}
