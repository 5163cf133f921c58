use serde::{Deserialize, Serialize};
use url::Url;

use crate::{ApiError, ApiSettings, EngineError, FailureKind};

/// Fixed path of the lengthening endpoint, relative to the API base.
pub const LENGTHEN_PATH: &str = "/api/lengthen";

#[derive(Debug, Serialize)]
struct LengthenRequest<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize)]
struct LengthenResponse {
    #[serde(default)]
    lengthened: Option<String>,
}

#[async_trait::async_trait]
pub trait LengthenApi: Send + Sync {
    /// Returns the lengthened URL, or an empty string when the service omits it.
    async fn lengthen(&self, url: &str) -> Result<String, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestLengthenApi {
    client: reqwest::Client,
    endpoint: Url,
}

impl ReqwestLengthenApi {
    pub fn new(settings: &ApiSettings) -> Result<Self, EngineError> {
        let endpoint = settings.endpoint(LENGTHEN_PATH)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl LengthenApi for ReqwestLengthenApi {
    async fn lengthen(&self, url: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&LengthenRequest { url })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // Error bodies are never inspected.
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let parsed: LengthenResponse = serde_json::from_slice(&body)
            .map_err(|err| ApiError::new(FailureKind::InvalidBody, err.to_string()))?;
        Ok(parsed.lengthened.unwrap_or_default())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
