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

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::product::ProductType;

/// Order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
	Buy,
	Sell,
}

impl OrderSide {
	pub fn as_str(&self) -> &'static str {
		match self {
			OrderSide::Buy => "buy",
			OrderSide::Sell => "sell",
		}
	}
}

impl fmt::Display for OrderSide {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
	Market,
	Limit,
}

/// How long a limit order stays on the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
	/// Good till cancelled
	#[default]
	Gtc,
	/// Good till time
	Gtt,
	/// Immediate or cancel
	Ioc,
	/// Fill or kill
	Fok,
}

impl TimeInForce {
	/// Query string form
	pub fn as_str(&self) -> &'static str {
		match self {
			TimeInForce::Gtc => "GTC",
			TimeInForce::Gtt => "GTT",
			TimeInForce::Ioc => "IOC",
			TimeInForce::Fok => "FOK",
		}
	}
}

impl fmt::Display for TimeInForce {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Order status as reported by the exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
	Open,
	Pending,
	Active,
	Received,
	Done,
	Rejected,
	#[serde(other)]
	Unknown,
}

/// Order payload sent to `POST /orders`
///
/// Time in force, post-only and cancel-after are query parameters on this
/// endpoint and never appear in the body. Decimals are written as JSON
/// numbers with the exact digits and scale given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
	/// Order side
	pub side: OrderSide,
	/// Product identifier (e.g., "BTC-USD")
	pub product_id: ProductType,
	/// Order type
	#[serde(rename = "type")]
	pub order_type: OrderType,
	/// Price (limit orders only)
	#[serde(
		with = "rust_decimal::serde::arbitrary_precision_option",
		skip_serializing_if = "Option::is_none"
	)]
	pub price: Option<Decimal>,
	/// Size/quantity
	#[serde(with = "rust_decimal::serde::arbitrary_precision")]
	pub size: Decimal,
}

impl OrderRequest {
	/// Market order; the exchange fills at the best available price
	pub fn market(side: OrderSide, product_id: ProductType, size: Decimal) -> Self {
		Self {
			side,
			product_id,
			order_type: OrderType::Market,
			price: None,
			size,
		}
	}

	/// Limit order at `price`
	pub fn limit(side: OrderSide, product_id: ProductType, size: Decimal, price: Decimal) -> Self {
		Self {
			side,
			product_id,
			order_type: OrderType::Limit,
			price: Some(price),
			size,
		}
	}
}

/// Query options for a limit order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitOrderOptions {
	pub time_in_force: TimeInForce,
	pub post_only: bool,
}

impl Default for LimitOrderOptions {
	fn default() -> Self {
		Self {
			time_in_force: TimeInForce::Gtc,
			post_only: true,
		}
	}
}

/// Order as returned by the exchange
///
/// Only `id` is guaranteed; the rest depends on the endpoint and the order's
/// state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
	/// Exchange-assigned order ID
	pub id: String,
	#[serde(default)]
	pub price: Option<Decimal>,
	#[serde(default)]
	pub size: Option<Decimal>,
	#[serde(default)]
	pub product_id: Option<String>,
	#[serde(default)]
	pub side: Option<OrderSide>,
	/// Self-trade prevention flag
	#[serde(default)]
	pub stp: Option<String>,
	#[serde(default, rename = "type")]
	pub order_type: Option<OrderType>,
	#[serde(default)]
	pub time_in_force: Option<TimeInForce>,
	#[serde(default)]
	pub post_only: Option<bool>,
	#[serde(default)]
	pub created_at: Option<DateTime<Utc>>,
	#[serde(default)]
	pub fill_fees: Option<Decimal>,
	#[serde(default)]
	pub filled_size: Option<Decimal>,
	#[serde(default)]
	pub executed_value: Option<Decimal>,
	#[serde(default)]
	pub status: Option<OrderStatus>,
	#[serde(default)]
	pub settled: Option<bool>,
}

/// Identifiers of cancelled orders
///
/// Empty when nothing was cancelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelOrderResponse {
	pub order_ids: Vec<String>,
}

impl CancelOrderResponse {
	pub fn is_empty(&self) -> bool {
		self.order_ids.is_empty()
	}
}
