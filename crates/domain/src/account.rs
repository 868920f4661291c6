use crate::shared::entity::{Entity, ID};
use seaboo_utils::create_random_secret;
use serde::{Deserialize, Serialize};

const API_KEY_LEN: usize = 30;
const WEBHOOK_KEY_LEN: usize = 24;

/// An `Account` is a marketplace tenant. Every `User`, `Listing` and `Booking`
/// belongs to exactly one `Account`, so several marketplaces can share one
/// deployment without seeing each other's data.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: ID,
    pub secret_api_key: String,
    /// Used to verify the json web tokens of the `User`s of this `Account`
    pub public_jwt_key: Option<PEMKey>,
    pub settings: AccountSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PEMKey(String);

impl PEMKey {
    pub fn new(key: String) -> anyhow::Result<Self> {
        jsonwebtoken::DecodingKey::from_rsa_pem(key.as_bytes())?;
        Ok(Self(key))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSettings {
    pub webhook: Option<AccountWebhookSettings>,
}

/// Booking status changes are posted to `url` with `key` in the
/// `seaboo-webhook-key` header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountWebhookSettings {
    pub url: String,
    pub key: String,
}

impl AccountSettings {
    /// Returns false when the url is not a valid http(s) url
    pub fn set_webhook_url(&mut self, webhook_url: Option<String>) -> bool {
        let url = match webhook_url {
            Some(url) => url,
            None => {
                self.webhook = None;
                return true;
            }
        };

        match url::Url::parse(&url) {
            Ok(parsed_url) if ["https", "http"].contains(&parsed_url.scheme()) => (),
            _ => return false,
        }

        match self.webhook.as_mut() {
            Some(webhook_settings) => webhook_settings.url = url,
            None => {
                self.webhook = Some(AccountWebhookSettings {
                    url,
                    key: create_random_secret(WEBHOOK_KEY_LEN),
                })
            }
        }
        true
    }
}

impl Account {
    pub fn new() -> Self {
        Self {
            id: Default::default(),
            public_jwt_key: None,
            secret_api_key: Self::generate_secret_api_key(),
            settings: Default::default(),
        }
    }

    pub fn generate_secret_api_key() -> String {
        format!("sk_{}", create_random_secret(API_KEY_LEN))
    }

    pub fn set_public_jwt_key(&mut self, key: Option<PEMKey>) {
        self.public_jwt_key = key;
    }
}

impl Entity for Account {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}
