use std::time::Duration;

use asnalo_domain::constants::DEFAULT_GATEWAY_TIMEOUT_SECS;
use asnalo_domain::{GatewayConfig, SfaError};
use reqwest::header::HeaderMap;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

use crate::errors::InfraError;

/// Thin reqwest wrapper used for every call to the generation service.
///
/// Each request is sent exactly once and bounded by the client timeout.
/// Non-success statuses come back as a normal [`Response`]; callers decide
/// how to classify them.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Build a client from the gateway settings.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, SfaError> {
        Self::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("asnalo/", env!("CARGO_PKG_VERSION")))
            .build()
    }

    pub fn new() -> Result<Self, SfaError> {
        Self::builder().build()
    }

    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Send one request. Transport failures map to [`SfaError::Network`].
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, SfaError> {
        let request = builder.build().map_err(into_sfa)?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        debug!(%method, %path, "sending HTTP request");
        let response = self.client.execute(request).await.map_err(|err| {
            debug!(%method, %path, error = %err, "HTTP request failed");
            into_sfa(err)
        })?;
        debug!(%method, %path, status = %response.status(), "received HTTP response");

        Ok(response)
    }
}

fn into_sfa(err: reqwest::Error) -> SfaError {
    InfraError::from(err).into()
}

#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
    default_headers: Option<HeaderMap>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_GATEWAY_TIMEOUT_SECS),
            user_agent: None,
            default_headers: None,
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    pub fn build(self) -> Result<HttpClient, SfaError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();
        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }
        if let Some(headers) = self.default_headers {
            builder = builder.default_headers(headers);
        }

        let client = builder.build().map_err(into_sfa)?;
        Ok(HttpClient { client })
    }
}
