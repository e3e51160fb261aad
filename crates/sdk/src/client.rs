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

use std::sync::Arc;

use chrono::{DateTime, TimeZone};
use rust_decimal::Decimal;
use tracing::info;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::orders::OrdersService;
use crate::product::ProductType;
use crate::request::RequestBuilder;
use crate::service::ApiService;
use crate::signing::{Authenticator, HmacAuthenticator};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{CancelOrderResponse, LimitOrderOptions, OrderResponse, OrderSide};

/// Client for the exchange REST API
///
/// Holds the transport and authenticator shared by every service. Cloning is
/// cheap.
#[derive(Clone)]
pub struct Client {
	orders: OrdersService,
}

impl Client {
	/// Create a client using `reqwest` and HMAC key authentication
	pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
		let transport = ReqwestTransport::new(config.resolved_base_url(), config.timeout())?;
		let authenticator =
			HmacAuthenticator::new(&config.api_key, &config.api_secret, &config.passphrase)?;

		info!(target: "client", "Using API at {}", transport.base_url());

		Ok(Self::with_collaborators(
			Arc::new(transport),
			Arc::new(authenticator),
			&config.user_agent,
		))
	}

	/// Create a client with a custom transport and authenticator
	pub fn with_collaborators(
		transport: Arc<dyn HttpTransport>,
		authenticator: Arc<dyn Authenticator>,
		user_agent: &str,
	) -> Self {
		let api = ApiService::new(transport, RequestBuilder::new(authenticator, user_agent));

		Self {
			orders: OrdersService::new(api),
		}
	}

	/// Order endpoints
	pub fn orders(&self) -> &OrdersService {
		&self.orders
	}
}

/// Synchronous client wrapper
///
/// Runs the async client on an owned tokio runtime. Must not be used from
/// inside another runtime.
pub struct SyncClient {
	client: Client,
	runtime: tokio::runtime::Runtime,
}

impl SyncClient {
	pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
		let runtime = tokio::runtime::Runtime::new()
			.map_err(|e| anyhow::anyhow!("Failed to create tokio runtime: {}", e))?;
		Ok(Self {
			client: Client::new(config)?,
			runtime,
		})
	}

	pub fn place_market_order(
		&self,
		side: OrderSide,
		product: ProductType,
		size: Decimal,
	) -> Result<OrderResponse, ClientError> {
		self.runtime
			.block_on(self.client.orders().place_market_order(side, product, size))
	}

	pub fn place_limit_order(
		&self,
		side: OrderSide,
		product: ProductType,
		size: Decimal,
		price: Decimal,
		options: LimitOrderOptions,
	) -> Result<OrderResponse, ClientError> {
		self.runtime.block_on(
			self.client
				.orders()
				.place_limit_order(side, product, size, price, options),
		)
	}

	pub fn place_limit_order_cancel_after<Tz: TimeZone>(
		&self,
		side: OrderSide,
		product: ProductType,
		size: Decimal,
		price: Decimal,
		cancel_after: DateTime<Tz>,
		post_only: bool,
	) -> Result<OrderResponse, ClientError> {
		self.runtime.block_on(self.client.orders().place_limit_order_cancel_after(
			side,
			product,
			size,
			price,
			cancel_after,
			post_only,
		))
	}

	pub fn cancel_all_orders(&self) -> Result<CancelOrderResponse, ClientError> {
		self.runtime.block_on(self.client.orders().cancel_all_orders())
	}

	pub fn cancel_order_by_id(&self, id: &str) -> Result<CancelOrderResponse, ClientError> {
		self.runtime
			.block_on(self.client.orders().cancel_order_by_id(id))
	}

	pub fn get_all_orders(&self, limit: u32) -> Result<Vec<Vec<OrderResponse>>, ClientError> {
		self.runtime.block_on(self.client.orders().get_all_orders(limit))
	}

	pub fn get_order_by_id(&self, id: &str) -> Result<OrderResponse, ClientError> {
		self.runtime.block_on(self.client.orders().get_order_by_id(id))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn test_config() -> ClientConfig {
		ClientConfig {
			base_url: "http://localhost:8080".to_string(),
			api_key: "key".to_string(),
			api_secret: "c2VjcmV0".to_string(),
			passphrase: "pass".to_string(),
			..Default::default()
		}
	}

	#[test]
	fn test_client_creation() {
		assert!(Client::new(&test_config()).is_ok());
	}

	#[test]
	fn test_client_rejects_bad_secret() {
		let config = ClientConfig {
			api_secret: "***".to_string(),
			..test_config()
		};
		assert!(matches!(
			Client::new(&config),
			Err(ClientError::Authentication(_))
		));
	}

	#[test]
	fn test_sync_client_creation() {
		let client = SyncClient::new(&test_config());
		assert!(client.is_ok());
	}
}
