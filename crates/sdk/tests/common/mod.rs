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

//! Test doubles shared by the integration tests

#![allow(dead_code)]

use std::{
	collections::VecDeque,
	sync::{Arc, Mutex},
};

use async_trait::async_trait;
use gdax_sdk::{
	Authenticator, Client, ClientError, HttpMethod, HttpRequest, HttpResponse, HttpTransport,
};

/// Transport that replays queued responses and records every request
#[derive(Default)]
pub struct MockTransport {
	responses: Mutex<VecDeque<Result<Option<HttpResponse>, ClientError>>>,
	requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn respond(&self, response: HttpResponse) {
		self.responses.lock().unwrap().push_back(Ok(Some(response)));
	}

	pub fn respond_json(&self, status: u16, body: &str) {
		self.respond(HttpResponse::new(status, body));
	}

	pub fn respond_no_content(&self) {
		self.responses.lock().unwrap().push_back(Ok(None));
	}

	pub fn fail(&self, error: ClientError) {
		self.responses.lock().unwrap().push_back(Err(error));
	}

	pub fn requests(&self) -> Vec<HttpRequest> {
		self.requests.lock().unwrap().clone()
	}

	pub fn last_request(&self) -> HttpRequest {
		self.requests
			.lock()
			.unwrap()
			.last()
			.cloned()
			.expect("no request was sent")
	}
}

#[async_trait]
impl HttpTransport for MockTransport {
	async fn send(&self, request: HttpRequest) -> Result<Option<HttpResponse>, ClientError> {
		self.requests.lock().unwrap().push(request);
		self.responses
			.lock()
			.unwrap()
			.pop_front()
			.unwrap_or_else(|| Err(ClientError::Network("no response queued".to_string())))
	}
}

/// Authenticator with a fixed, recognisable header
pub struct StaticAuthenticator;

impl Authenticator for StaticAuthenticator {
	fn authenticate(
		&self,
		method: HttpMethod,
		request_path: &str,
		_body: &str,
	) -> Result<Vec<(String, String)>, ClientError> {
		Ok(vec![(
			"X-Test-Signed".to_string(),
			format!("{} {}", method, request_path),
		)])
	}
}

pub fn client_with(transport: Arc<MockTransport>) -> Client {
	Client::with_collaborators(transport, Arc::new(StaticAuthenticator), "gdax-sdk-test")
}
