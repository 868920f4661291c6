use crate::shared::usecase::{execute, UseCase};
use crate::{error::SeabooError, shared::auth::protect_account_route};
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::set_account_pub_key::{APIResponse, RequestBody};
use seaboo_domain::{Account, PEMKey};
use seaboo_infra::SeabooContext;

pub async fn set_account_pub_key_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;

    let usecase = SetAccountPubKeyUseCase {
        account,
        public_jwt_key: body.0.public_jwt_key,
    };

    execute(usecase, &ctx)
        .await
        .map(|account| HttpResponse::Ok().json(APIResponse::new(account)))
        .map_err(SeabooError::from)
}

#[derive(Debug)]
struct SetAccountPubKeyUseCase {
    pub account: Account,
    pub public_jwt_key: Option<String>,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    InvalidPemKey,
    StorageError,
}

impl From<UseCaseError> for SeabooError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidPemKey => Self::BadClientData(
                "Malformed public pem key provided. Expected an RSA public key in PEM format"
                    .into(),
            ),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetAccountPubKeyUseCase {
    type Response = Account;

    type Error = UseCaseError;

    const NAME: &'static str = "SetAccountPublicKey";

    async fn execute(&mut self, ctx: &SeabooContext) -> Result<Self::Response, Self::Error> {
        let key = match &self.public_jwt_key {
            Some(key) => match PEMKey::new(key.clone()) {
                Ok(key) => Some(key),
                Err(_) => return Err(UseCaseError::InvalidPemKey),
            },
            None => None,
        };
        self.account.set_public_jwt_key(key);

        match ctx.repos.accounts.save(&self.account).await {
            Ok(_) => Ok(self.account.clone()),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
