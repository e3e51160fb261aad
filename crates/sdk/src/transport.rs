// Copyright 2025 itscheems
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, StatusCode};
use tracing::debug;

use crate::error::ClientError;
use crate::request::{HttpMethod, HttpRequest};

/// Raw HTTP response handed back by a transport
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
	pub status: u16,
	/// Header names are lower-cased
	pub headers: HashMap<String, String>,
	pub body: String,
}

impl HttpResponse {
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self {
			status,
			headers: HashMap::new(),
			body: body.into(),
		}
	}

	pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
		self.headers.insert(name.to_ascii_lowercase(), value.into());
		self
	}

	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.get(&name.to_ascii_lowercase())
			.map(String::as_str)
	}

	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Sends signed requests to the exchange
///
/// `Ok(None)` means the exchange answered without content; callers decide
/// whether that is an acceptable outcome.
#[async_trait]
pub trait HttpTransport: Send + Sync {
	async fn send(&self, request: HttpRequest) -> Result<Option<HttpResponse>, ClientError>;
}

/// Transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
	base_url: String,
	client: ReqwestClient,
}

impl ReqwestTransport {
	/// Create a transport for `base_url` with a per-request timeout
	pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
		let client = ReqwestClient::builder()
			.timeout(timeout)
			.build()
			.map_err(|e| ClientError::Network(format!("Failed to create HTTP client: {}", e)))?;

		Ok(Self {
			base_url: base_url.into().trim_end_matches('/').to_string(),
			client,
		})
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
	async fn send(&self, request: HttpRequest) -> Result<Option<HttpResponse>, ClientError> {
		let url = format!("{}{}", self.base_url, request.path);

		let mut builder = match request.method {
			HttpMethod::Get => self.client.get(&url),
			HttpMethod::Post => self.client.post(&url),
			HttpMethod::Delete => self.client.delete(&url),
		};
		for (name, value) in &request.headers {
			builder = builder.header(name.as_str(), value.as_str());
		}
		if let Some(body) = request.body {
			builder = builder.body(body);
		}

		let response = builder
			.send()
			.await
			.map_err(|e| ClientError::Network(format!("Request failed: {}", e)))?;

		let status = response.status();
		debug!(target: "transport", "{} {} -> {}", request.method, request.path, status);

		if status == StatusCode::NO_CONTENT {
			return Ok(None);
		}

		let headers = response
			.headers()
			.iter()
			.filter_map(|(name, value)| {
				value
					.to_str()
					.ok()
					.map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
			})
			.collect();

		let body = response
			.text()
			.await
			.map_err(|e| ClientError::Network(format!("Failed to read response body: {}", e)))?;

		Ok(Some(HttpResponse {
			status: status.as_u16(),
			headers,
			body,
		}))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_transport_creation_trims_trailing_slash() {
		let transport =
			ReqwestTransport::new("http://localhost:8080/", Duration::from_secs(5)).unwrap();
		assert_eq!(transport.base_url(), "http://localhost:8080");
	}

	#[test]
	fn test_response_header_lookup_is_case_insensitive() {
		let response = HttpResponse::new(200, "[]").with_header("CB-AFTER", "42");
		assert_eq!(response.header("cb-after"), Some("42"));
		assert_eq!(response.header("Cb-After"), Some("42"));
		assert!(response.is_success());
	}

	#[test]
	fn test_non_2xx_is_not_success() {
		assert!(!HttpResponse::new(400, "").is_success());
		assert!(!HttpResponse::new(302, "").is_success());
	}
}
