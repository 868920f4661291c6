use crate::shared::usecase::{execute, UseCase};
use crate::{error::SeabooError, shared::auth::protect_account_route};
use actix_web::{web, HttpRequest, HttpResponse};
use seaboo_api_structs::set_account_webhook::{APIResponse, RequestBody};
use seaboo_domain::Account;
use seaboo_infra::SeabooContext;

pub async fn set_account_webhook_controller(
    http_req: HttpRequest,
    ctx: web::Data<SeabooContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, SeabooError> {
    let account = protect_account_route(&http_req, &ctx).await?;

    let usecase = SetAccountWebhookUseCase {
        account,
        webhook_url: Some(body.0.webhook_url),
    };

    execute(usecase, &ctx)
        .await
        .map(|account| HttpResponse::Ok().json(APIResponse::new(account)))
        .map_err(SeabooError::from)
}

/// Also used to remove the webhook by setting `webhook_url` to `None`
#[derive(Debug)]
pub struct SetAccountWebhookUseCase {
    pub account: Account,
    pub webhook_url: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidURI(String),
    StorageError,
}

impl From<UseCaseError> for SeabooError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidURI(err) => {
                Self::BadClientData(format!("Invalid URI provided. Error message: {}", err))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetAccountWebhookUseCase {
    type Response = Account;

    type Error = UseCaseError;

    const NAME: &'static str = "SetAccountWebhook";

    async fn execute(&mut self, ctx: &SeabooContext) -> Result<Self::Response, Self::Error> {
        let success = self
            .account
            .settings
            .set_webhook_url(self.webhook_url.clone());

        if !success {
            return Err(UseCaseError::InvalidURI(format!(
                "Malformed url or scheme is not http(s): {:?}",
                self.webhook_url
            )));
        }

        match ctx.repos.accounts.save(&self.account).await {
            Ok(_) => Ok(self.account.clone()),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn it_rejects_invalid_webhook_url() {
        let ctx = SeabooContext::create_inmemory();
        let bad_uris = vec!["1", "", "test.zzcom", "test.com", "ftp://marina.com"];
        for bad_uri in bad_uris {
            let mut use_case = SetAccountWebhookUseCase {
                webhook_url: Some(bad_uri.to_string()),
                account: Default::default(),
            };
            let res = use_case.execute(&ctx).await;
            assert_eq!(
                res.err(),
                Some(UseCaseError::InvalidURI(format!(
                    "Malformed url or scheme is not http(s): {:?}",
                    Some(bad_uri)
                )))
            );
        }
    }

    #[actix_web::test]
    async fn it_accepts_valid_webhook_url_and_keeps_the_key() {
        let ctx = SeabooContext::create_inmemory();
        let account = Account::default();
        ctx.repos.accounts.insert(&account).await.unwrap();

        let mut use_case = SetAccountWebhookUseCase {
            webhook_url: Some("https://marina.example.com/hooks".into()),
            account,
        };
        let account = use_case.execute(&ctx).await.unwrap();
        let key = account.settings.webhook.clone().unwrap().key;

        let mut use_case = SetAccountWebhookUseCase {
            webhook_url: Some("https://marina.example.com/v2/hooks".into()),
            account,
        };
        let account = use_case.execute(&ctx).await.unwrap();
        let webhook = account.settings.webhook.unwrap();
        assert_eq!(webhook.url, "https://marina.example.com/v2/hooks");
        assert_eq!(webhook.key, key);
    }
}
