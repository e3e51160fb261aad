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

//! Command-line client for the order endpoints
//!
//! Credentials come from `GDAX_*` environment variables (or a `.env` file),
//! or from the file given with `--config`.

mod logging;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand, ValueEnum};
use gdax_sdk::{
	Client, ClientConfig, DEFAULT_PAGE_LIMIT, LimitOrderOptions, OrderSide, ProductType,
	TimeInForce,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "gdax-cmd", version, about = "Place, cancel and inspect exchange orders")]
struct Cli {
	/// Configuration file (environment variables still apply on top)
	#[arg(long, global = true)]
	config: Option<String>,

	/// Use the sandbox endpoint unless a base URL is configured
	#[arg(long, global = true)]
	sandbox: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SideArg {
	Buy,
	Sell,
}

impl From<SideArg> for OrderSide {
	fn from(side: SideArg) -> Self {
		match side {
			SideArg::Buy => OrderSide::Buy,
			SideArg::Sell => OrderSide::Sell,
		}
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TifArg {
	Gtc,
	Gtt,
	Ioc,
	Fok,
}

impl From<TifArg> for TimeInForce {
	fn from(tif: TifArg) -> Self {
		match tif {
			TifArg::Gtc => TimeInForce::Gtc,
			TifArg::Gtt => TimeInForce::Gtt,
			TifArg::Ioc => TimeInForce::Ioc,
			TifArg::Fok => TimeInForce::Fok,
		}
	}
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Place a market order
	Market {
		side: SideArg,
		/// Product, e.g. BTC-USD
		product: ProductType,
		size: Decimal,
	},
	/// Place a limit order
	Limit {
		side: SideArg,
		product: ProductType,
		size: Decimal,
		price: Decimal,
		#[arg(long, value_enum, default_value = "gtc")]
		tif: TifArg,
		#[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
		post_only: bool,
		/// RFC 3339 instant, encoded in its own offset; sends a GTT order and ignores --tif
		#[arg(long)]
		cancel_after: Option<DateTime<FixedOffset>>,
	},
	/// Cancel every open order
	CancelAll,
	/// Cancel one order
	Cancel { id: String },
	/// List orders
	List {
		#[arg(long, default_value_t = DEFAULT_PAGE_LIMIT)]
		limit: u32,
	},
	/// Show one order
	Get { id: String },
}

fn load_config(cli: &Cli) -> Result<ClientConfig> {
	let mut config = match &cli.config {
		Some(path) => ClientConfig::from_file(path)
			.with_context(|| format!("Failed to load configuration from {}", path))?,
		None => ClientConfig::from_env().context("Failed to load configuration")?,
	};
	if cli.sandbox {
		config.sandbox = true;
	}
	Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	logging::init_logging()?;

	let config = load_config(&cli)?;
	let client = Client::new(&config)?;
	let orders = client.orders();

	info!(target: "cmd", "Running {:?}", cli.command);

	match cli.command {
		Command::Market {
			side,
			product,
			size,
		} => {
			let order = orders.place_market_order(side.into(), product, size).await?;
			print_json(&order)
		}
		Command::Limit {
			side,
			product,
			size,
			price,
			tif,
			post_only,
			cancel_after,
		} => {
			let order = match cancel_after {
				Some(cancel_after) => {
					orders
						.place_limit_order_cancel_after(
							side.into(),
							product,
							size,
							price,
							cancel_after,
							post_only,
						)
						.await?
				}
				None => {
					let options = LimitOrderOptions {
						time_in_force: tif.into(),
						post_only,
					};
					orders
						.place_limit_order(side.into(), product, size, price, options)
						.await?
				}
			};
			print_json(&order)
		}
		Command::CancelAll => print_json(&orders.cancel_all_orders().await?),
		Command::Cancel { id } => print_json(&orders.cancel_order_by_id(&id).await?),
		Command::List { limit } => print_json(&orders.get_all_orders(limit).await?),
		Command::Get { id } => print_json(&orders.get_order_by_id(&id).await?),
	}
}
