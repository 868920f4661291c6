use super::utils::{create_token, PUBLIC_KEY_PATH};
use seaboo_api::Application;
use seaboo_infra::{setup_context, Config};
use seaboo_sdk::{CreateUserInput, SeabooSDK, ID};

pub struct TestApp {
    pub config: Config,
    pub address: String,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, SeabooSDK, String) {
    let mut ctx = setup_context().await;
    ctx.config.port = 0; // Random port

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp {
        config,
        address: address.clone(),
    };
    let sdk = SeabooSDK::new(address.clone(), "");
    (app, sdk, address)
}

/// An `Account` that accepts user tokens signed with the test key
pub struct TestAccount {
    pub id: ID,
    pub admin: SeabooSDK,
}

impl TestAccount {
    /// Creates a `User` in the account and a client acting as that user
    pub async fn user(&self, app: &TestApp) -> (ID, SeabooSDK) {
        let user = self
            .admin
            .user
            .create(CreateUserInput::default())
            .await
            .expect("Expected to create user")
            .user;
        let token = create_token(&user.id);
        let sdk = SeabooSDK::new_user(app.address.clone(), self.id.clone(), token);
        (user.id, sdk)
    }

    pub fn public(&self, app: &TestApp) -> SeabooSDK {
        SeabooSDK::new_public(app.address.clone(), self.id.clone())
    }
}

pub async fn setup_account(app: &TestApp, sdk: &SeabooSDK) -> TestAccount {
    let res = sdk
        .account
        .create(&app.config.create_account_secret_code)
        .await
        .expect("Expected to create account");
    let admin = SeabooSDK::new(app.address.clone(), res.secret_api_key);

    let public_key = std::fs::read_to_string(PUBLIC_KEY_PATH).expect("Expected to read public key");
    admin
        .account
        .set_public_jwt_key(Some(public_key))
        .await
        .expect("Expected to set public key");

    TestAccount {
        id: res.account.id,
        admin,
    }
}
