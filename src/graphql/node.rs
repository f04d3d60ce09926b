//! Global object identification.
//!
//! A global id is the base64 encoding of `"<TypeName>:<local id>"`. Clients
//! must treat it as opaque; the server uses it to route `node(id:)` lookups.

use async_graphql::{ID, Interface};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::types::Video;

pub const VIDEO_TYPE: &str = "Video";

/// An object with a globally unique ID.
#[derive(Interface)]
#[graphql(field(name = "id", ty = "ID", desc = "The ID of an object"))]
pub enum Node {
    Video(Video),
}

pub fn to_global_id(type_name: &str, id: &str) -> ID {
    ID(STANDARD.encode(format!("{}:{}", type_name, id)))
}

/// Split a global id into its type name and local id.
///
/// Returns `None` for anything that was not produced by [`to_global_id`].
/// Malformed ids are indistinguishable from ids of objects that don't exist.
pub fn from_global_id(global_id: &str) -> Option<(String, String)> {
    let bytes = STANDARD.decode(global_id).ok()?;
    let decoded = String::from_utf8(bytes).ok()?;
    let (type_name, id) = decoded.split_once(':')?;
    if type_name.is_empty() {
        return None;
    }
    Some((type_name.to_string(), id.to_string()))
}

/// Local id of a video, given either its global id or the raw local id.
pub fn video_local_id(id: &str) -> String {
    match from_global_id(id) {
        Some((type_name, local)) if type_name == VIDEO_TYPE => local,
        _ => id.to_string(),
    }
}
