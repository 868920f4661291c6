use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

/// Who the requests are sent on behalf of
#[derive(Debug, Clone)]
pub(crate) enum Credentials {
    /// Admin requests authenticated by the secret api key of the `Account`
    ApiKey(String),
    /// Requests made by a `User` with a token signed by the `Account`
    User { account_id: String, token: String },
    /// Public routes only need to know the `Account`
    Account(String),
}

pub(crate) struct BaseClient {
    address: String,
    client: Client,
    credentials: Option<Credentials>,
}

#[derive(Debug)]
pub enum APIError {
    Network,
    MalformedResponse,
    Unauthorized,
    NotFound,
    Conflict,
    BadClientData,
    UnexpectedStatusCode(StatusCode),
}
pub type APIResponse<T> = Result<T, APIError>;

impl BaseClient {
    pub fn new(address: String, credentials: Option<Credentials>) -> Self {
        Self {
            address,
            client: Client::new(),
            credentials,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.address, path);
        let builder = self.client.request(method, &url);

        match &self.credentials {
            Some(Credentials::ApiKey(api_key)) => builder.header("x-api-key", api_key),
            Some(Credentials::User { account_id, token }) => builder
                .header("seaboo-account", account_id)
                .bearer_auth(token),
            Some(Credentials::Account(account_id)) => builder.header("seaboo-account", account_id),
            None => builder,
        }
    }

    fn check_status_code(res: &Response, expected_status_code: StatusCode) -> Result<(), APIError> {
        let status = res.status();
        if status == expected_status_code {
            return Ok(());
        }
        Err(match status {
            StatusCode::UNAUTHORIZED => APIError::Unauthorized,
            StatusCode::NOT_FOUND => APIError::NotFound,
            StatusCode::CONFLICT => APIError::Conflict,
            StatusCode::BAD_REQUEST => APIError::BadClientData,
            _ => APIError::UnexpectedStatusCode(status),
        })
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = builder.send().await.map_err(|_| APIError::Network)?;
        Self::check_status_code(&res, expected_status_code)?;
        res.json::<T>()
            .await
            .map_err(|_| APIError::MalformedResponse)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(self.request(Method::GET, &path), expected_status_code)
            .await
    }

    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: String,
        query: &Q,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(
            self.request(Method::GET, &path).query(query),
            expected_status_code,
        )
        .await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(self.request(Method::DELETE, &path), expected_status_code)
            .await
    }

    pub async fn put<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(
            self.request(Method::PUT, &path).json(&body),
            expected_status_code,
        )
        .await
    }

    pub async fn post<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        self.send(
            self.request(Method::POST, &path).json(&body),
            expected_status_code,
        )
        .await
    }
}
