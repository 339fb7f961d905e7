//! Tests for the Notion client and metadata extraction, backed by a local
//! mock server.

use httpmock::prelude::*;
use serde_json::json;

use dashboard_sdk::{config, DashboardError, NotionClient, Page};

const PAGE_ID: &str = "58d5f26367fb4197852a6546c10d9da0";

fn client_for(server: &MockServer) -> NotionClient {
    NotionClient::builder()
        .token("secret-token")
        .base_url(server.base_url())
        .build()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Successful retrieval
// ---------------------------------------------------------------------------

#[test]
fn retrieves_a_page_and_extracts_its_metadata() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v1/pages/{PAGE_ID}"))
            .header("authorization", "Bearer secret-token")
            .header("notion-version", config::NOTION_API_VERSION);
        then.status(200).json_body(json!({
            "object": "page",
            "id": PAGE_ID,
            "created_time": "2023-03-01T09:00:00.000Z",
            "last_edited_time": "2023-06-15T12:30:00.000Z",
            "url": "https://www.notion.so/Q3-Report",
            "properties": {
                "title": {
                    "title": [
                        {"plain_text": "Q3 Report", "type": "text"},
                        {"plain_text": " (draft)", "type": "text"}
                    ]
                }
            }
        }));
    });

    let client = client_for(&server);
    let metadata = client.page_metadata(PAGE_ID).unwrap();
    mock.assert();

    // Only the first title run contributes to the title.
    assert_eq!(metadata.title, "Q3 Report");
    assert_eq!(
        metadata.created_time.as_deref(),
        Some("2023-03-01T09:00:00.000Z")
    );
    assert_eq!(
        metadata.last_edited_time.as_deref(),
        Some("2023-06-15T12:30:00.000Z")
    );
    assert_eq!(
        metadata.url.as_deref(),
        Some("https://www.notion.so/Q3-Report")
    );
}

#[test]
fn unknown_fields_in_the_document_are_ignored() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(format!("/v1/pages/{PAGE_ID}"));
        then.status(200).json_body(json!({
            "object": "page",
            "archived": false,
            "icon": {"type": "emoji", "emoji": "📊"},
            "properties": {
                "title": {"title": [{"plain_text": "Minimal"}]},
                "Status": {"select": {"name": "Done"}}
            }
        }));
    });

    let page = client_for(&server).retrieve_page(PAGE_ID).unwrap();
    assert_eq!(page.title(), "Minimal");
    assert_eq!(page.created_time, None);
    assert_eq!(page.url, None);
}

// ---------------------------------------------------------------------------
// Title fallback
// ---------------------------------------------------------------------------

#[test]
fn empty_title_run_list_falls_back_to_untitled() {
    let page: Page =
        serde_json::from_value(json!({"properties": {"title": {"title": []}}})).unwrap();
    assert_eq!(page.title(), "Untitled");
}

#[test]
fn absent_title_structures_fall_back_to_untitled() {
    let shapes = [
        json!({}),
        json!({"properties": {}}),
        json!({"properties": {"title": {}}}),
        json!({"properties": {"title": {"title": [{}]}}}),
    ];
    for shape in shapes {
        let page: Page = serde_json::from_value(shape.clone()).unwrap();
        assert_eq!(page.title(), "Untitled", "shape: {shape}");
    }
}

#[test]
fn single_run_title_is_returned_verbatim() {
    let page: Page = serde_json::from_value(json!({
        "properties": {"title": {"title": [{"plain_text": "Q3 Report"}]}}
    }))
    .unwrap();
    assert_eq!(page.title(), "Q3 Report");
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

#[test]
fn missing_page_maps_to_page_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(format!("/v1/pages/{PAGE_ID}"));
        then.status(404).json_body(json!({
            "object": "error",
            "status": 404,
            "code": "object_not_found",
            "message": "Could not find page with ID."
        }));
    });

    let err = client_for(&server).retrieve_page(PAGE_ID).unwrap_err();
    match err {
        DashboardError::PageNotFound(id) => assert_eq!(id, PAGE_ID),
        other => panic!("expected PageNotFound, got {other:?}"),
    }
}

#[test]
fn invalid_token_maps_to_unauthorized() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(format!("/v1/pages/{PAGE_ID}"));
        then.status(401).json_body(json!({
            "object": "error",
            "status": 401,
            "code": "unauthorized",
            "message": "API token is invalid."
        }));
    });

    let err = client_for(&server).retrieve_page(PAGE_ID).unwrap_err();
    match err {
        DashboardError::Unauthorized(message) => {
            assert_eq!(message, "API token is invalid.");
        }
        other => panic!("expected Unauthorized, got {other:?}"),
    }
}

#[test]
fn restricted_page_maps_to_unauthorized() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(format!("/v1/pages/{PAGE_ID}"));
        then.status(403).body("");
    });

    let err = client_for(&server).retrieve_page(PAGE_ID).unwrap_err();
    assert!(matches!(err, DashboardError::Unauthorized(_)));
}

#[test]
fn other_failures_carry_status_and_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(format!("/v1/pages/{PAGE_ID}"));
        then.status(429).json_body(json!({
            "object": "error",
            "status": 429,
            "code": "rate_limited",
            "message": "Rate limited, slow down."
        }));
    });

    let err = client_for(&server).retrieve_page(PAGE_ID).unwrap_err();
    match err {
        DashboardError::Api { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "Rate limited, slow down.");
        }
        other => panic!("expected Api, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Builder / token resolution
// ---------------------------------------------------------------------------

#[test]
fn missing_token_fails_at_build_time() {
    std::env::remove_var(config::NOTION_TOKEN_ENV);
    let err = NotionClient::builder().build().unwrap_err();
    assert!(matches!(err, DashboardError::MissingToken));
}

#[test]
fn explicit_token_wins_over_the_environment() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v1/pages/{PAGE_ID}"))
            .header("authorization", "Bearer explicit-token");
        then.status(200).json_body(json!({"object": "page"}));
    });

    let client = NotionClient::builder()
        .token("explicit-token")
        .base_url(server.base_url())
        .build()
        .unwrap();
    let page = client.retrieve_page(PAGE_ID).unwrap();
    mock.assert();

    // No properties at all still yields the fallback title.
    assert_eq!(page.title(), "Untitled");
}
