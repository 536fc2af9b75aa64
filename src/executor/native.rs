//! Blocking HTTP transport backed by reqwest.

use super::config::ExecutionConfig;
use super::error::RequestError;
use super::Transport;
use crate::models::request::HttpMethod;
use crate::models::response::ResponseRecord;
use crate::models::usecase::MaterializedUseCase;
use std::time::Instant;
use url::Url;

/// Sends use cases with a blocking `reqwest` client.
///
/// One client is built per run and reused, so connections are pooled across
/// use cases.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new(config: &ExecutionConfig) -> Result<Self, RequestError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout_duration())
            .build()
            .map_err(|e| RequestError::BuildError(e.to_string()))?;

        Ok(Self { client })
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::GET => reqwest::Method::GET,
        HttpMethod::POST => reqwest::Method::POST,
        HttpMethod::PUT => reqwest::Method::PUT,
        HttpMethod::DELETE => reqwest::Method::DELETE,
        HttpMethod::PATCH => reqwest::Method::PATCH,
        HttpMethod::HEAD => reqwest::Method::HEAD,
        HttpMethod::OPTIONS => reqwest::Method::OPTIONS,
        HttpMethod::TRACE => reqwest::Method::TRACE,
        HttpMethod::CONNECT => reqwest::Method::CONNECT,
    }
}

/// The endpoint must be a complete URL once templates are resolved.
fn parse_endpoint(endpoint: &str) -> Result<Url, RequestError> {
    Url::parse(endpoint).map_err(|e| RequestError::InvalidUrl {
        url: endpoint.to_string(),
        reason: e.to_string(),
    })
}

impl Transport for ReqwestTransport {
    fn send(&self, usecase: &MaterializedUseCase) -> Result<ResponseRecord, RequestError> {
        let url = parse_endpoint(&usecase.endpoint)?;
        let start_time = Instant::now();

        let mut req_builder = self.client.request(to_reqwest_method(usecase.method), url);

        for (name, value) in &usecase.headers {
            req_builder = req_builder.header(name.as_str(), value.as_str());
        }

        if !usecase.body.is_empty() {
            req_builder = req_builder.body(usecase.body.clone());
        }

        let response = req_builder.send()?;
        let status_code = response.status().as_u16();

        let mut record = ResponseRecord::new(status_code);
        for (name, value) in response.headers() {
            if let Ok(value_str) = value.to_str() {
                record.add_header(name.as_str().to_string(), value_str.to_string());
            }
        }

        record.body = response
            .bytes()
            .map_err(|e| RequestError::BodyError(e.to_string()))?
            .to_vec();
        record.duration = start_time.elapsed();

        Ok(record)
    }
}
