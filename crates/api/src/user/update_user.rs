use crate::shared::usecase::{execute, UseCase};
use crate::{
    error::SeabooError,
    shared::auth::{account_can_modify_user, protect_account_route},
};
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::update_user::*;
use seaboo_domain::{is_valid_metadata, Metadata, User};
use seaboo_infra::SeabooContext;

pub async fn update_user_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    path_params: web::Path<PathParams>,
    ctx: web::Data<SeabooContext>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;
    let user = account_can_modify_user(&account, &path_params.user_id, &ctx).await?;

    let usecase = UpdateUserUseCase {
        user,
        metadata: body.0.metadata,
    };

    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Ok().json(APIResponse::new(user)))
        .map_err(SeabooError::from)
}

#[derive(Debug)]
struct UpdateUserUseCase {
    pub user: User,
    pub metadata: Option<Metadata>,
}

#[derive(Debug)]
enum UseCaseError {
    InvalidMetadata,
    StorageError,
}

impl From<UseCaseError> for SeabooError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidMetadata => {
                Self::BadClientData("Too many metadata entries or too long values".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateUserUseCase {
    type Response = User;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateUser";

    async fn execute(&mut self, ctx: &SeabooContext) -> Result<Self::Response, Self::Error> {
        if let Some(metadata) = &self.metadata {
            if !is_valid_metadata(metadata) {
                return Err(UseCaseError::InvalidMetadata);
            }
            self.user.metadata = metadata.clone();
        }

        match ctx.repos.users.save(&self.user).await {
            Ok(_) => Ok(self.user.clone()),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
