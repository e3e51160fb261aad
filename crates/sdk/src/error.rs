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

use thiserror::Error;

/// Error types for client operations
#[derive(Debug, Error)]
pub enum ClientError {
	#[error("Network error: {0}")]
	Network(String),
	#[error("Serialization error: {0}")]
	Serialization(String),
	#[error("API error ({status}): {message}")]
	Api { status: u16, message: String },
	#[error("Authentication error: {0}")]
	Authentication(String),
	#[error("Invalid response: {0}")]
	InvalidResponse(String),
	#[error("Configuration error: {0}")]
	Config(String),
}

impl ClientError {
	/// Build an `Api` error from a non-success status and the raw response body.
	///
	/// The exchange reports failures as `{"message": "..."}`; when the body has
	/// that shape only the message is kept, otherwise the body is used as-is.
	pub fn from_status(status: u16, body: &str) -> Self {
		#[derive(serde::Deserialize)]
		struct ErrorBody {
			message: String,
		}

		let message = match serde_json::from_str::<ErrorBody>(body) {
			Ok(parsed) => parsed.message,
			Err(_) if body.trim().is_empty() => format!("HTTP {}", status),
			Err(_) => body.to_string(),
		};

		ClientError::Api { status, message }
	}

	/// HTTP status of an `Api` error
	pub fn status(&self) -> Option<u16> {
		match self {
			ClientError::Api { status, .. } => Some(*status),
			_ => None,
		}
	}
}

impl From<serde_json::Error> for ClientError {
	fn from(e: serde_json::Error) -> Self {
		ClientError::Serialization(e.to_string())
	}
}

impl From<config::ConfigError> for ClientError {
	fn from(e: config::ConfigError) -> Self {
		ClientError::Config(e.to_string())
	}
}
