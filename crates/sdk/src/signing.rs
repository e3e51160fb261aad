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

//! Request authentication
//!
//! Every private endpoint expects four headers:
//!
//! - `CB-ACCESS-KEY`: the API key
//! - `CB-ACCESS-SIGN`: base64 HMAC-SHA256 of `timestamp + METHOD + request_path + body`,
//!   keyed with the base64-decoded API secret
//! - `CB-ACCESS-TIMESTAMP`: unix seconds used in the signature
//! - `CB-ACCESS-PASSPHRASE`: the passphrase chosen when the key was created
//!
//! `request_path` includes the query string. `body` is empty for requests
//! without one.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::ClientError;
use crate::request::HttpMethod;

pub const HEADER_ACCESS_KEY: &str = "CB-ACCESS-KEY";
pub const HEADER_ACCESS_SIGN: &str = "CB-ACCESS-SIGN";
pub const HEADER_ACCESS_TIMESTAMP: &str = "CB-ACCESS-TIMESTAMP";
pub const HEADER_ACCESS_PASSPHRASE: &str = "CB-ACCESS-PASSPHRASE";

type HmacSha256 = Hmac<Sha256>;

/// Produces the authentication headers for a request
pub trait Authenticator: Send + Sync {
	fn authenticate(
		&self,
		method: HttpMethod,
		request_path: &str,
		body: &str,
	) -> Result<Vec<(String, String)>, ClientError>;
}

/// API key authentication using the exchange's HMAC scheme
#[derive(Clone)]
pub struct HmacAuthenticator {
	api_key: String,
	secret: Vec<u8>,
	passphrase: String,
}

impl HmacAuthenticator {
	/// Create an authenticator from the key material shown when the API key
	/// was created. `api_secret` is base64 as issued by the exchange.
	pub fn new(
		api_key: impl Into<String>,
		api_secret: &str,
		passphrase: impl Into<String>,
	) -> Result<Self, ClientError> {
		let secret = STANDARD
			.decode(api_secret.trim())
			.map_err(|e| ClientError::Authentication(format!("API secret is not base64: {}", e)))?;

		Ok(Self {
			api_key: api_key.into(),
			secret,
			passphrase: passphrase.into(),
		})
	}

	/// Compute the `CB-ACCESS-SIGN` value for a request sent at `timestamp`
	pub fn sign(
		&self,
		timestamp: i64,
		method: HttpMethod,
		request_path: &str,
		body: &str,
	) -> Result<String, ClientError> {
		let mut mac = HmacSha256::new_from_slice(&self.secret)
			.map_err(|e| ClientError::Authentication(format!("Invalid HMAC key: {}", e)))?;
		mac.update(timestamp.to_string().as_bytes());
		mac.update(method.as_str().as_bytes());
		mac.update(request_path.as_bytes());
		mac.update(body.as_bytes());

		Ok(STANDARD.encode(mac.finalize().into_bytes()))
	}

	/// Authentication headers for a request sent at `timestamp`
	pub fn headers_at(
		&self,
		timestamp: i64,
		method: HttpMethod,
		request_path: &str,
		body: &str,
	) -> Result<Vec<(String, String)>, ClientError> {
		let signature = self.sign(timestamp, method, request_path, body)?;

		Ok(vec![
			(HEADER_ACCESS_KEY.to_string(), self.api_key.clone()),
			(HEADER_ACCESS_SIGN.to_string(), signature),
			(HEADER_ACCESS_TIMESTAMP.to_string(), timestamp.to_string()),
			(HEADER_ACCESS_PASSPHRASE.to_string(), self.passphrase.clone()),
		])
	}
}

impl Authenticator for HmacAuthenticator {
	fn authenticate(
		&self,
		method: HttpMethod,
		request_path: &str,
		body: &str,
	) -> Result<Vec<(String, String)>, ClientError> {
		self.headers_at(Utc::now().timestamp(), method, request_path, body)
	}
}

impl fmt::Debug for HmacAuthenticator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HmacAuthenticator")
			.field("api_key", &self.api_key)
			.field("secret", &"<redacted>")
			.field("passphrase", &"<redacted>")
			.finish()
	}
}
