use crate::shared::usecase::{execute, UseCase};
use crate::{error::SeabooError, shared::auth::protect_account_route};
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::create_user::*;
use seaboo_domain::{is_valid_metadata, Metadata, User, ID};
use seaboo_infra::SeabooContext;

pub async fn create_user_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<SeabooContext>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;

    let usecase = CreateUserUseCase {
        account_id: account.id,
        metadata: body.0.metadata.unwrap_or_default(),
    };

    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Created().json(APIResponse::new(user)))
        .map_err(SeabooError::from)
}

#[derive(Debug)]
pub struct CreateUserUseCase {
    pub account_id: ID,
    pub metadata: Metadata,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
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
impl UseCase for CreateUserUseCase {
    type Response = User;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateUser";

    async fn execute(&mut self, ctx: &SeabooContext) -> Result<Self::Response, Self::Error> {
        if !is_valid_metadata(&self.metadata) {
            return Err(UseCaseError::InvalidMetadata);
        }
        let mut user = User::new(self.account_id.clone());
        user.metadata = self.metadata.clone();

        match ctx.repos.users.insert(&user).await {
            Ok(_) => Ok(user),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
