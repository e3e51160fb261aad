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

//! Order placement, cancellation and lookup
//!
//! | Operation | Request |
//! |---|---|
//! | market order | `POST /orders` |
//! | limit order | `POST /orders?time_in_force=..&post_only=..` |
//! | limit order with cancel-after | `POST /orders?time_in_force=GTT&cancel_after=m,h,d&post_only=..` |
//! | cancel all | `DELETE /orders` |
//! | cancel one | `DELETE /orders/{id}` |
//! | list | `GET /orders?limit=n` (paginated) |
//! | get one | `GET /orders/{id}` |
//!
//! Nothing is validated locally; the exchange's rejection comes back as
//! [`ClientError::Api`].

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::ClientError;
use crate::product::ProductType;
use crate::request::HttpMethod;
use crate::service::ApiService;
use crate::types::{
	CancelOrderResponse, LimitOrderOptions, OrderRequest, OrderResponse, OrderSide, TimeInForce,
};

const ORDERS_PATH: &str = "/orders";

/// Default page size for [`OrdersService::get_all_orders`]
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

#[derive(Clone)]
pub struct OrdersService {
	api: ApiService,
}

impl OrdersService {
	pub fn new(api: ApiService) -> Self {
		Self { api }
	}

	/// Place a market order
	pub async fn place_market_order(
		&self,
		side: OrderSide,
		product: ProductType,
		size: Decimal,
	) -> Result<OrderResponse, ClientError> {
		let request = OrderRequest::market(side, product, size);
		info!(target: "orders", "Placing market {} {} {}", side, size, product);

		self.post_order(ORDERS_PATH.to_string(), &request).await
	}

	/// Place a limit order with an explicit time in force
	pub async fn place_limit_order(
		&self,
		side: OrderSide,
		product: ProductType,
		size: Decimal,
		price: Decimal,
		options: LimitOrderOptions,
	) -> Result<OrderResponse, ClientError> {
		let request = OrderRequest::limit(side, product, size, price);
		let path = format!(
			"{}?time_in_force={}&post_only={}",
			ORDERS_PATH,
			options.time_in_force.as_str(),
			options.post_only
		);
		info!(
			target: "orders",
			"Placing limit {} {} {} @ {} ({})",
			side, size, product, price, options.time_in_force
		);

		self.post_order(path, &request).await
	}

	/// Place a good-till-time limit order
	///
	/// `cancel_after` is sent as `minute,hour,day` taken from the wall-clock
	/// components of the given instant in its own time zone. The exchange
	/// reads that parameter as a unit name, so callers must not rely on it
	/// expressing either a duration or an absolute expiry.
	pub async fn place_limit_order_cancel_after<Tz: TimeZone>(
		&self,
		side: OrderSide,
		product: ProductType,
		size: Decimal,
		price: Decimal,
		cancel_after: DateTime<Tz>,
		post_only: bool,
	) -> Result<OrderResponse, ClientError> {
		let request = OrderRequest::limit(side, product, size, price);
		let encoded = encode_cancel_after(&cancel_after);
		let path = format!(
			"{}?time_in_force={}&cancel_after={}&post_only={}",
			ORDERS_PATH,
			TimeInForce::Gtt.as_str(),
			encoded,
			post_only
		);
		info!(
			target: "orders",
			"Placing limit {} {} {} @ {} (GTT, cancel_after={})",
			side, size, product, price, encoded
		);

		self.post_order(path, &request).await
	}

	/// Cancel every open order
	pub async fn cancel_all_orders(&self) -> Result<CancelOrderResponse, ClientError> {
		let order_ids: Vec<String> = self
			.api
			.send_json(HttpMethod::Delete, ORDERS_PATH, None)
			.await?;
		info!(target: "orders", "Cancelled {} orders", order_ids.len());

		Ok(CancelOrderResponse { order_ids })
	}

	/// Cancel one order
	///
	/// A response without content yields an empty set. Any other successful
	/// response yields `id` itself; the body is not inspected.
	pub async fn cancel_order_by_id(&self, id: &str) -> Result<CancelOrderResponse, ClientError> {
		let path = format!("{}/{}", ORDERS_PATH, id);
		let response = self.api.send(HttpMethod::Delete, &path, None).await?;

		if response.is_none() {
			debug!(target: "orders", "Cancel {} returned no content", id);
			return Ok(CancelOrderResponse::default());
		}

		info!(target: "orders", "Cancelled order {}", id);
		Ok(CancelOrderResponse {
			order_ids: vec![id.to_string()],
		})
	}

	/// List orders, one inner vector per page
	pub async fn get_all_orders(&self, limit: u32) -> Result<Vec<Vec<OrderResponse>>, ClientError> {
		let path = format!("{}?limit={}", ORDERS_PATH, limit);
		self.api.send_paged(HttpMethod::Get, &path).await
	}

	/// Fetch one order by its exchange ID
	pub async fn get_order_by_id(&self, id: &str) -> Result<OrderResponse, ClientError> {
		let path = format!("{}/{}", ORDERS_PATH, id);
		self.api.send_json(HttpMethod::Get, &path, None).await
	}

	async fn post_order(
		&self,
		path: String,
		request: &OrderRequest,
	) -> Result<OrderResponse, ClientError> {
		let body = serde_json::to_string(request)?;
		self.api.send_json(HttpMethod::Post, &path, Some(body)).await
	}
}

/// `minute,hour,day` of the given instant
pub fn encode_cancel_after<Tz: TimeZone>(cancel_after: &DateTime<Tz>) -> String {
	format!(
		"{},{},{}",
		cancel_after.minute(),
		cancel_after.hour(),
		cancel_after.day()
	)
}
