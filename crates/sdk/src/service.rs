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

//! Shared request plumbing for the API services
//!
//! Every service call goes through [`ApiService`]: build and sign the
//! request, send it, reject non-2xx statuses, deserialize the body.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::request::{HttpMethod, RequestBuilder};
use crate::transport::{HttpResponse, HttpTransport};

/// Response header carrying the cursor of the next (older) page
pub const HEADER_PAGE_AFTER: &str = "cb-after";

#[derive(Clone)]
pub struct ApiService {
	transport: Arc<dyn HttpTransport>,
	request_builder: RequestBuilder,
}

impl ApiService {
	pub fn new(transport: Arc<dyn HttpTransport>, request_builder: RequestBuilder) -> Self {
		Self {
			transport,
			request_builder,
		}
	}

	/// Send one signed request
	///
	/// Returns `Ok(None)` when the exchange answered without content.
	pub async fn send(
		&self,
		method: HttpMethod,
		path: &str,
		body: Option<String>,
	) -> Result<Option<HttpResponse>, ClientError> {
		let request = self.request_builder.build(method, path, body)?;
		debug!(target: "api", "{} {}", method, path);

		let response = self.transport.send(request).await?;
		match response {
			Some(response) if !response.is_success() => {
				warn!(target: "api", "{} {} failed with status {}", method, path, response.status);
				Err(ClientError::from_status(response.status, &response.body))
			}
			other => Ok(other),
		}
	}

	/// Send one signed request and deserialize the JSON response
	pub async fn send_json<T: DeserializeOwned>(
		&self,
		method: HttpMethod,
		path: &str,
		body: Option<String>,
	) -> Result<T, ClientError> {
		let response = self.send(method, path, body).await?.ok_or_else(|| {
			ClientError::InvalidResponse(format!("{} {} returned no content", method, path))
		})?;

		Self::parse(&response)
	}

	/// Fetch every page of a paginated endpoint
	///
	/// The first page is `path` as given; later pages add `after=<cursor>`
	/// from the previous page's `CB-AFTER` header. Stops when the header is
	/// missing, the cursor repeats, or a page is empty.
	pub async fn send_paged<T: DeserializeOwned>(
		&self,
		method: HttpMethod,
		path: &str,
	) -> Result<Vec<Vec<T>>, ClientError> {
		let mut pages = Vec::new();
		let mut cursor: Option<String> = None;

		loop {
			let page_path = match &cursor {
				Some(after) => with_query_param(path, "after", after),
				None => path.to_string(),
			};

			let Some(response) = self.send(method, &page_path, None).await? else {
				break;
			};

			let page: Vec<T> = Self::parse(&response)?;
			debug!(target: "api", "page {} of {}: {} items", pages.len() + 1, path, page.len());
			if page.is_empty() {
				break;
			}
			pages.push(page);

			let next = response.header(HEADER_PAGE_AFTER).map(str::to_string);
			match next {
				Some(next) if !next.is_empty() && cursor.as_deref() != Some(next.as_str()) => {
					cursor = Some(next);
				}
				_ => break,
			}
		}

		Ok(pages)
	}

	fn parse<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ClientError> {
		serde_json::from_str(&response.body).map_err(|e| {
			ClientError::Serialization(format!("Failed to parse response: {}", e))
		})
	}
}

/// Append `key=value` to `path`, starting a query string if needed
fn with_query_param(path: &str, key: &str, value: &str) -> String {
	let separator = if path.contains('?') { '&' } else { '?' };
	format!("{}{}{}={}", path, separator, key, value)
}
