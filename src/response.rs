//! Typed shapes of the group events GraphQL response
//!
//! Every level of the connection is optional so that a group that does not
//! resolve (or a response without `data`) deserializes cleanly and can be
//! treated as "no events" by the caller. The same goes for a body that is
//! not an object, or a `data`/`groupByUrlname` of the wrong type.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// Top-level GraphQL response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default, deserialize_with = "object_or_none")]
    pub data: Option<ResponseData>,
    #[serde(default, deserialize_with = "list_or_empty")]
    pub errors: Vec<GraphqlError>,
}

/// Error entry reported by the GraphQL server
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseData {
    #[serde(rename = "groupByUrlname", default, deserialize_with = "object_or_none")]
    pub group_by_urlname: Option<GroupNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupNode {
    #[serde(rename = "unifiedEvents", default)]
    pub unified_events: Option<EventConnection>,
}

/// One page of the group's events connection
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventConnection {
    /// Total number of events for the group
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: u64,
    #[serde(rename = "pageInfo", default)]
    pub page_info: Option<PageInfo>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub edges: Vec<EventEdge>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageInfo {
    #[serde(rename = "endCursor", default)]
    pub end_cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventEdge {
    #[serde(default)]
    pub node: Option<RawEventNode>,
}

/// Raw event as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawEventNode {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "dateTime", default)]
    pub date_time: Option<String>,
    #[serde(rename = "endTime", default)]
    pub end_time: Option<String>,
    #[serde(rename = "eventUrl", default)]
    pub event_url: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub topics: Option<TopicConnection>,
}

/// Topics attached to an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TopicConnection {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub edges: Vec<TopicEdge>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TopicEdge {
    #[serde(default)]
    pub node: Option<TopicNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TopicNode {
    #[serde(default)]
    pub name: Option<String>,
}

impl GraphqlResponse {
    /// Decode a response body; anything but a JSON object carries no data
    pub fn from_body(body: Value) -> crate::error::Result<Self> {
        if !body.is_object() {
            warn!("GraphQL response body is not an object");
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(body)?)
    }

    /// Take the events connection out of the response, if the group resolved
    pub fn into_connection(self) -> Option<EventConnection> {
        for error in &self.errors {
            warn!("GraphQL error: {}", error.message);
        }
        self.data?.group_by_urlname?.unified_events
    }
}

impl EventConnection {
    /// Cursor pointing after the last edge of this page
    pub fn end_cursor(&self) -> Option<&str> {
        self.page_info
            .as_ref()
            .and_then(|info| info.end_cursor.as_deref())
    }
}

impl RawEventNode {
    /// Topic names in edge order
    pub fn topic_names(&self) -> Vec<String> {
        self.topics
            .iter()
            .flat_map(|topics| topics.edges.iter())
            .filter_map(|edge| edge.node.as_ref())
            .filter_map(|node| node.name.clone())
            .collect()
    }
}

/// Accept `count` as a number, a numeric string or null; fractions truncate
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u64),
        Signed(i64),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<Count>::deserialize(deserializer)? {
        Some(Count::Number(n)) => n,
        Some(Count::Signed(n)) => n.max(0) as u64,
        Some(Count::Float(n)) if n.is_finite() && n > 0.0 => n.trunc() as u64,
        Some(Count::Float(_)) => 0,
        Some(Count::Text(s)) => s.trim().parse().unwrap_or(0),
        None => 0,
    })
}

/// Keep an object value; any other JSON type reads as absent
fn object_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => T::deserialize(value).map(Some).map_err(D::Error::custom),
        _ => Ok(None),
    }
}

fn list_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Array(_) => Vec::<T>::deserialize(value).map_err(D::Error::custom),
        _ => Ok(Vec::new()),
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
