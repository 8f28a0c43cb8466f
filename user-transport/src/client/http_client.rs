use std::{collections::HashMap, str::FromStr, time::Duration};

use crate::{errors::TransportError, request_builder::ReqBuilder};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use user_utils::{Error, HttpError};

#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(
        base_url: &str,
        headers_opt: Option<HashMap<String, String>>,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();

        headers.append(
            header::ACCEPT,
            HeaderValue::from_static("application/json"),
        );
        headers.append(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        if let Some(opt) = headers_opt {
            for (key, value) in opt {
                let name = HeaderName::from_str(&key)
                    .map_err(|e| Error::Http(HttpError::InvalidHeader(format!("{key}: {e}"))))?;
                let value = HeaderValue::from_str(&value)
                    .map_err(|e| Error::Http(HttpError::InvalidHeader(format!("{key}: {e}"))))?;
                headers.insert(name, value);
            }
        };

        let mut builder = reqwest::ClientBuilder::new().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Utils(Error::Http(e.into())))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        let endpoint = endpoint.trim_start_matches('/');
        if endpoint.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }

    pub fn post(&self, endpoint: &str) -> ReqBuilder {
        let url = self.url(endpoint);
        tracing::info!("request url = POST {}", url);
        ReqBuilder(self.client.post(url))
    }

    pub fn get(&self, endpoint: &str) -> ReqBuilder {
        let url = self.url(endpoint);
        tracing::info!("request url = GET {}", url);
        ReqBuilder(self.client.get(url))
    }
}
