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

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Production REST endpoint
pub const PRODUCTION_BASE_URL: &str = "https://api.gdax.com";

/// Sandbox REST endpoint
pub const SANDBOX_BASE_URL: &str = "https://api-public.sandbox.gdax.com";

/// Default request timeout in milliseconds (can be overridden by GDAX_TIMEOUT_MS)
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "GDAX";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
	/// REST base URL; empty selects production or sandbox from `sandbox`
	pub base_url: String,
	pub api_key: String,
	/// Base64 API secret
	pub api_secret: String,
	pub passphrase: String,
	pub timeout_ms: u64,
	pub user_agent: String,
	pub sandbox: bool,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			base_url: String::new(),
			api_key: String::new(),
			api_secret: String::new(),
			passphrase: String::new(),
			timeout_ms: DEFAULT_TIMEOUT_MS,
			user_agent: default_user_agent(),
			sandbox: false,
		}
	}
}

fn default_user_agent() -> String {
	format!("gdax-sdk/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
	/// Load configuration from environment variables (`GDAX_API_KEY`, ...)
	///
	/// A `.env` file in the working directory is loaded first if present.
	pub fn from_env() -> Result<Self, ClientError> {
		dotenv::dotenv().ok();

		let cfg = config::Config::builder()
			.add_source(config::Environment::with_prefix(ENV_PREFIX))
			.build()?;

		Ok(cfg.try_deserialize()?)
	}

	/// Load configuration from file, with environment variables on top
	pub fn from_file(path: &str) -> Result<Self, ClientError> {
		dotenv::dotenv().ok();

		let cfg = config::Config::builder()
			.add_source(config::File::with_name(path))
			.add_source(config::Environment::with_prefix(ENV_PREFIX))
			.build()?;

		Ok(cfg.try_deserialize()?)
	}

	/// Base URL requests are sent to
	pub fn resolved_base_url(&self) -> &str {
		if !self.base_url.is_empty() {
			&self.base_url
		} else if self.sandbox {
			SANDBOX_BASE_URL
		} else {
			PRODUCTION_BASE_URL
		}
	}

	pub fn timeout(&self) -> Duration {
		Duration::from_millis(self.timeout_ms)
	}
}
