use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::error::DecodeError;

/// One entry of a user's public events feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Event {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repo: Repo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payload: Payload,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Repo {
    /// `owner/repo`
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Type-specific event data. Every key from the feed is kept; which ones
/// matter depends on the event's `type`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Payload(BTreeMap<String, PayloadValue>);

impl Payload {
    pub fn get(&self, key: &str) -> Option<&PayloadValue> {
        self.0.get(key)
    }

    /// The value under `key` if it is a string.
    pub fn str(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            PayloadValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The value under `key` if it is an array.
    pub fn array(&self, key: &str) -> Option<&[PayloadValue]> {
        match self.get(key)? {
            PayloadValue::Array(items) => Some(items),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PayloadValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<PayloadValue>),
    Object(BTreeMap<String, PayloadValue>),
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a feed response body. Anything but a JSON array of event objects is
/// rejected as a whole.
pub fn decode_events(body: &[u8]) -> Result<Vec<Event>, DecodeError> {
    Ok(serde_json::from_slice(body)?)
}
