use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug)]
pub enum APIError {
    Network,
    MalformedResponse,
    UnexpectedStatusCode {
        expected: StatusCode,
        got: StatusCode,
        res: String,
    },
}

pub type APIResponse<T> = Result<T, APIError>;

pub(crate) struct BaseClient {
    address: String,
    client: Client,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            address,
            client: Client::new(),
        }
    }

    fn get_url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.address, path)
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        res: reqwest::Response,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let status = res.status();
        if status != expected_status_code {
            return Err(APIError::UnexpectedStatusCode {
                expected: expected_status_code,
                got: status,
                res: res.text().await.unwrap_or_default(),
            });
        }
        res.json::<T>().await.map_err(|_| APIError::MalformedResponse)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .client
            .get(&self.get_url(&path))
            .send()
            .await
            .map_err(|_| APIError::Network)?;
        self.handle_response(res, expected_status_code).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        body: B,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = self
            .client
            .post(&self.get_url(&path))
            .json(&body)
            .send()
            .await
            .map_err(|_| APIError::Network)?;
        self.handle_response(res, expected_status_code).await
    }
}
