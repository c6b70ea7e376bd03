//! Relay global IDs.
//! See: https://graphql.org/learn/global-object-identification/

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Encode a type name and a raw identifier as an opaque global ID.
pub fn to_global_id(type_name: &str, id: &str) -> String {
    STANDARD.encode(format!("{}:{}", type_name, id))
}

/// Split a global ID into its type name and raw identifier.
pub fn from_global_id(global_id: &str) -> Option<(String, String)> {
    let decoded = STANDARD.decode(global_id).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (type_name, id) = decoded.split_once(':')?;
    if type_name.is_empty() {
        return None;
    }
    Some((type_name.to_string(), id.to_string()))
}
