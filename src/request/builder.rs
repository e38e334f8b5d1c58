//! Page request builder
//!
//! Builds the JSON body and headers for one page of the group events query.

use super::template::GROUP_EVENTS_QUERY;
use crate::error::{Error, Result};
use crate::types::{Credential, GroupUrlname};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Variables bound to the group events query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventVariables {
    /// Group URL name
    pub urlname: String,
    /// Page size
    pub items_num: u32,
    /// Cursor of the previous page; omitted from the body when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// GraphQL request body
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest {
    /// Query document
    pub query: &'static str,
    /// Query variables
    pub variables: EventVariables,
}

/// A fully built page request, ready for a transport
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    /// Headers to send with the request
    pub headers: HashMap<String, String>,
    /// JSON body
    pub body: Value,
}

impl PageRequest {
    /// Cursor carried by this request, if any
    pub fn cursor(&self) -> Option<&str> {
        self.body
            .get("variables")
            .and_then(|v| v.get("cursor"))
            .and_then(Value::as_str)
    }
}

/// Builds page requests for one group and credential
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    group: GroupUrlname,
    credential: Credential,
    page_size: u32,
}

impl RequestBuilder {
    /// Create a builder.
    ///
    /// Fails with a configuration error when the group is blank, the
    /// credential is blank or the page size is zero.
    pub fn new(group: &str, credential: Credential, page_size: u32) -> Result<Self> {
        let group = GroupUrlname::new(group)?;
        if credential.is_blank() {
            return Err(Error::missing_field("token"));
        }
        if page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be greater than 0"));
        }
        Ok(Self {
            group,
            credential,
            page_size,
        })
    }

    /// Group this builder queries
    pub fn group(&self) -> &GroupUrlname {
        &self.group
    }

    /// Page size sent as `itemsNum`
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Build the typed request body for a page
    pub fn body(&self, cursor: Option<&str>) -> GraphqlRequest {
        GraphqlRequest {
            query: GROUP_EVENTS_QUERY,
            variables: EventVariables {
                urlname: self.group.as_str().to_string(),
                items_num: self.page_size,
                cursor: cursor.map(str::to_string),
            },
        }
    }

    /// Build request headers
    pub fn headers(&self) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.credential.expose()),
        );
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }

    /// Build the full request for a page
    pub fn page(&self, cursor: Option<&str>) -> Result<PageRequest> {
        Ok(PageRequest {
            headers: self.headers(),
            body: serde_json::to_value(self.body(cursor))?,
        })
    }
}
