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

//! Integration tests for cursor pagination

mod common;

use gdax_sdk::HttpResponse;

use common::{MockTransport, client_with};

fn page(ids: &[&str], after: Option<&str>) -> HttpResponse {
	let body = serde_json::to_string(
		&ids.iter()
			.map(|id| serde_json::json!({ "id": id }))
			.collect::<Vec<_>>(),
	)
	.unwrap();
	let response = HttpResponse::new(200, body);
	match after {
		Some(cursor) => response.with_header("CB-AFTER", cursor),
		None => response,
	}
}

#[tokio::test]
async fn test_follows_after_cursor_until_header_missing() {
	let transport = MockTransport::new();
	transport.respond(page(&["a", "b"], Some("1001")));
	transport.respond(page(&["c", "d"], Some("1002")));
	transport.respond(page(&["e"], None));
	let client = client_with(transport.clone());

	let pages = client.orders().get_all_orders(2).await.unwrap();

	let ids: Vec<Vec<&str>> = pages
		.iter()
		.map(|p| p.iter().map(|o| o.id.as_str()).collect())
		.collect();
	assert_eq!(ids, vec![vec!["a", "b"], vec!["c", "d"], vec!["e"]]);

	let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
	assert_eq!(
		paths,
		vec![
			"/orders?limit=2",
			"/orders?limit=2&after=1001",
			"/orders?limit=2&after=1002",
		]
	);
}

#[tokio::test]
async fn test_stops_on_empty_page() {
	let transport = MockTransport::new();
	transport.respond(page(&["a"], Some("7")));
	transport.respond(page(&[], Some("8")));
	let client = client_with(transport.clone());

	let pages = client.orders().get_all_orders(1).await.unwrap();

	assert_eq!(pages.len(), 1);
	assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn test_stops_on_repeated_cursor() {
	let transport = MockTransport::new();
	transport.respond(page(&["a"], Some("7")));
	transport.respond(page(&["b"], Some("7")));
	let client = client_with(transport.clone());

	let pages = client.orders().get_all_orders(1).await.unwrap();

	assert_eq!(pages.len(), 2);
	assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn test_no_orders() {
	let transport = MockTransport::new();
	transport.respond(page(&[], None));
	let client = client_with(transport.clone());

	let pages = client.orders().get_all_orders(100).await.unwrap();
	assert!(pages.is_empty());
}

#[tokio::test]
async fn test_error_on_later_page_propagates() {
	let transport = MockTransport::new();
	transport.respond(page(&["a"], Some("7")));
	transport.respond(HttpResponse::new(500, r#"{"message":"Internal server error"}"#));
	let client = client_with(transport.clone());

	let err = client.orders().get_all_orders(1).await.unwrap_err();
	assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_every_page_is_signed_with_its_own_path() {
	let transport = MockTransport::new();
	transport.respond(page(&["a"], Some("7")));
	transport.respond(page(&["b"], None));
	let client = client_with(transport.clone());

	client.orders().get_all_orders(1).await.unwrap();

	let signed: Vec<Option<String>> = transport
		.requests()
		.iter()
		.map(|r| r.header("X-Test-Signed").map(str::to_string))
		.collect();
	assert_eq!(
		signed,
		vec![
			Some("GET /orders?limit=1".to_string()),
			Some("GET /orders?limit=1&after=7".to_string()),
		]
	);
}

