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

//! Trading pairs and their exchange identifiers
//!
//! The exchange names products as upper-case, dash-separated pairs
//! (`BTC-USD`). The mapping is a fixed match so the wire form never depends
//! on how the enumerant is spelled.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Supported trading pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
	BtcUsd,
	BtcEur,
	BtcGbp,
	EthUsd,
	EthEur,
	EthBtc,
	LtcUsd,
	LtcEur,
	LtcBtc,
	BchUsd,
	BchBtc,
	BchEur,
}

const ALL: [ProductType; 12] = [
	ProductType::BtcUsd,
	ProductType::BtcEur,
	ProductType::BtcGbp,
	ProductType::EthUsd,
	ProductType::EthEur,
	ProductType::EthBtc,
	ProductType::LtcUsd,
	ProductType::LtcEur,
	ProductType::LtcBtc,
	ProductType::BchUsd,
	ProductType::BchBtc,
	ProductType::BchEur,
];

impl ProductType {
	/// Exchange product identifier, e.g. `BTC-USD`
	pub fn as_str(&self) -> &'static str {
		match self {
			ProductType::BtcUsd => "BTC-USD",
			ProductType::BtcEur => "BTC-EUR",
			ProductType::BtcGbp => "BTC-GBP",
			ProductType::EthUsd => "ETH-USD",
			ProductType::EthEur => "ETH-EUR",
			ProductType::EthBtc => "ETH-BTC",
			ProductType::LtcUsd => "LTC-USD",
			ProductType::LtcEur => "LTC-EUR",
			ProductType::LtcBtc => "LTC-BTC",
			ProductType::BchUsd => "BCH-USD",
			ProductType::BchBtc => "BCH-BTC",
			ProductType::BchEur => "BCH-EUR",
		}
	}

	/// All supported products
	pub fn all() -> impl Iterator<Item = ProductType> {
		ALL.into_iter()
	}
}

impl fmt::Display for ProductType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when a product identifier is not supported
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown product: {0}")]
pub struct UnknownProduct(pub String);

impl FromStr for ProductType {
	type Err = UnknownProduct;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ALL.into_iter()
			.find(|product| product.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| UnknownProduct(s.to_string()))
	}
}

impl Serialize for ProductType {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for ProductType {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse().map_err(serde::de::Error::custom)
	}
}
