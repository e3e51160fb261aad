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

//! GDAX SDK - Client library for the exchange's REST trading API
//!
//! This crate provides typed order endpoints on top of two pluggable
//! collaborators:
//! - [`HttpTransport`]: sends a signed request, `reqwest` by default
//! - [`Authenticator`]: produces the signing headers, HMAC key auth by default
//!
//! The SDK is lightweight and embeddable:
//! - No background threads
//! - No retries or rate limiting
//! - Configuration is loaded only when asked for ([`ClientConfig::from_env`])

pub mod client;
pub mod config;
pub mod error;
pub mod orders;
pub mod product;
pub mod request;
pub mod service;
pub mod signing;
pub mod transport;
pub mod types;

pub use client::{Client, SyncClient};
pub use config::ClientConfig;
pub use error::ClientError;
pub use orders::{DEFAULT_PAGE_LIMIT, OrdersService};
pub use product::ProductType;
pub use request::{HttpMethod, HttpRequest, RequestBuilder};
pub use service::ApiService;
pub use signing::{Authenticator, HmacAuthenticator};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
pub use types::*;
