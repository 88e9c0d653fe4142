//! JSON shapes returned by the daemon's `ls` and `pin/ls` endpoints.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// One named child of a listed object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LsLink {
    pub name: String,
    pub hash: String,
    #[serde(default)]
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LsObject {
    pub hash: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub links: Vec<LsLink>,
}

/// Body of `ls?arg=<hash>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LsResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub objects: Vec<LsObject>,
}

/// Pin entry: `recursive`, `direct` or `indirect`, plus a reference count.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PinInfo {
    #[serde(rename = "Type")]
    pub pin_type: String,
    #[serde(rename = "Count", default)]
    pub count: i64,
}

/// Body of `pin/ls`, keyed by pinned hash.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PinLsResponse {
    #[serde(default)]
    pub keys: BTreeMap<String, PinInfo>,
}

// The daemon sends `null` rather than `[]` for empty lists.
fn null_as_empty<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
}

/// `"<hash> <name>"` per link, one per line.
pub fn format_links(links: &[LsLink]) -> String {
    links
        .iter()
        .map(|l| format!("{} {}", l.hash, l.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pinned hashes in sorted order, one per line.
pub fn format_pins(pins: &PinLsResponse) -> String {
    pins.keys.keys().cloned().collect::<Vec<_>>().join("\n")
}
