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

use std::{fmt, sync::Arc};

use crate::error::ClientError;
use crate::signing::Authenticator;

/// HTTP methods used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	Get,
	Post,
	Delete,
}

impl HttpMethod {
	/// Upper-case method name, as used in the request signature
	pub fn as_str(&self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
			HttpMethod::Delete => "DELETE",
		}
	}
}

impl fmt::Display for HttpMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A fully built, signed request ready for a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
	pub method: HttpMethod,
	/// Path relative to the API base URL, including any query string
	pub path: String,
	pub headers: Vec<(String, String)>,
	pub body: Option<String>,
}

impl HttpRequest {
	/// First header value with the given name (case-insensitive)
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}

/// Builds signed requests
///
/// Adds the fixed headers every call carries, then the authenticator's
/// headers computed over the exact path and body being sent.
#[derive(Clone)]
pub struct RequestBuilder {
	authenticator: Arc<dyn Authenticator>,
	user_agent: String,
}

impl RequestBuilder {
	pub fn new(authenticator: Arc<dyn Authenticator>, user_agent: impl Into<String>) -> Self {
		Self {
			authenticator,
			user_agent: user_agent.into(),
		}
	}

	pub fn build(
		&self,
		method: HttpMethod,
		path: &str,
		body: Option<String>,
	) -> Result<HttpRequest, ClientError> {
		let auth_headers =
			self.authenticator
				.authenticate(method, path, body.as_deref().unwrap_or_default())?;

		let mut headers = Vec::with_capacity(auth_headers.len() + 2);
		headers.push(("Content-Type".to_string(), "application/json".to_string()));
		headers.push(("User-Agent".to_string(), self.user_agent.clone()));
		headers.extend(auth_headers);

		Ok(HttpRequest {
			method,
			path: path.to_string(),
			headers,
			body,
		})
	}
}

impl fmt::Debug for RequestBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RequestBuilder")
			.field("user_agent", &self.user_agent)
			.finish_non_exhaustive()
	}
}
