//! Tests for the request module

use super::*;
use crate::types::Credential;
use pretty_assertions::assert_eq;
use serde_json::json;

fn builder() -> RequestBuilder {
    RequestBuilder::new("aix-en-provence", Credential::new("12345"), PAGE_LIMIT).unwrap()
}

// ============================================================================
// Template Tests
// ============================================================================

#[test]
fn test_query_declares_variables() {
    assert!(GROUP_EVENTS_QUERY.contains("$urlname: String!"));
    assert!(GROUP_EVENTS_QUERY.contains("$itemsNum: Int!"));
    assert!(GROUP_EVENTS_QUERY.contains("$cursor: String"));
    assert!(GROUP_EVENTS_QUERY.contains("groupByUrlname(urlname: $urlname)"));
    assert!(GROUP_EVENTS_QUERY.contains("unifiedEvents(input: {first: $itemsNum, after: $cursor})"));
}

#[test]
fn test_page_limit() {
    assert_eq!(PAGE_LIMIT, 20);
    assert_eq!(GQL_PATH, "gql");
}

// ============================================================================
// Builder Tests
// ============================================================================

#[test]
fn test_first_page_body_omits_cursor() {
    let request = builder().page(None).unwrap();

    assert_eq!(
        request.body,
        json!({
            "query": GROUP_EVENTS_QUERY,
            "variables": {
                "urlname": "aix-en-provence",
                "itemsNum": 20
            }
        })
    );
    assert!(request.body["variables"].get("cursor").is_none());
    assert_eq!(request.cursor(), None);
}

#[test]
fn test_next_page_body_carries_cursor() {
    let request = builder().page(Some("MTIzNDU=")).unwrap();

    assert_eq!(
        request.body["variables"],
        json!({
            "urlname": "aix-en-provence",
            "itemsNum": 20,
            "cursor": "MTIzNDU="
        })
    );
    assert_eq!(request.cursor(), Some("MTIzNDU="));
}

#[test]
fn test_headers() {
    let headers = builder().headers();

    assert_eq!(headers.len(), 2);
    assert_eq!(headers.get("Authorization"), Some(&"Bearer 12345".to_string()));
    assert_eq!(
        headers.get("Content-Type"),
        Some(&"application/json".to_string())
    );
}

#[test]
fn test_custom_page_size() {
    let builder = RequestBuilder::new("lyon-rust", Credential::new("t"), 5).unwrap();
    let body = builder.body(None);

    assert_eq!(body.variables.items_num, 5);
    assert_eq!(body.variables.urlname, "lyon-rust");
    assert_eq!(builder.page_size(), 5);
    assert_eq!(builder.group().as_str(), "lyon-rust");
}

#[test]
fn test_group_sent_verbatim() {
    let request = RequestBuilder::new(" aix-en-provence ", Credential::new("12345"), PAGE_LIMIT)
        .unwrap()
        .page(None)
        .unwrap();
    assert_eq!(request.body["variables"]["urlname"], " aix-en-provence ");
}

#[test]
fn test_empty_group_is_config_error() {
    let err = RequestBuilder::new("", Credential::new("12345"), PAGE_LIMIT).unwrap_err();
    assert!(err.is_config());
    assert_eq!(err.to_string(), "Missing required config field: group_urlname");
}

#[test]
fn test_blank_token_is_config_error() {
    let err = RequestBuilder::new("aix-en-provence", Credential::new(""), PAGE_LIMIT).unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_zero_page_size_is_config_error() {
    let err = RequestBuilder::new("aix-en-provence", Credential::new("12345"), 0).unwrap_err();
    assert!(matches!(err, crate::Error::InvalidConfigValue { .. }));
}
