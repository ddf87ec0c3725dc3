//! MCP resources publishing the persisted Raibot documents.

use raibot_store::DocumentKey;

/// MIME type of every resource.
pub const JSON_MIME_TYPE: &str = "application/json";

/// One published document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSpec {
    /// Document served
    pub key: DocumentKey,
    /// Resource URI
    pub uri: &'static str,
    /// Display name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
}

/// All resources, in listing order.
pub const RESOURCES: [ResourceSpec; 3] = [
    ResourceSpec {
        key: DocumentKey::Map,
        uri: "memory://raibot_map",
        name: "Raibot Map",
        description: "The 5x5 tiles the Raibot has learned, where '?' is unknown, \
                      'X' is an obstacle and ' ' is a clear path. Indexed [column][row].",
    },
    ResourceSpec {
        key: DocumentKey::Location,
        uri: "memory://raibot_location",
        name: "Raibot Location",
        description: "The current column (x) and row (y) of the Raibot.",
    },
    ResourceSpec {
        key: DocumentKey::History,
        uri: "memory://raibot_history",
        name: "Raibot History",
        description: "Every instruction given to the Raibot and its result, oldest first.",
    },
];

/// Resource published at `uri`.
pub fn find(uri: &str) -> Option<&'static ResourceSpec> {
    RESOURCES.iter().find(|spec| spec.uri == uri)
}
