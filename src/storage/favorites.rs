//! Favorites persistence, backed by the browser's localStorage.
//!
//! The stored value is a JSON array of therapist ids under a single key.
//! Encoding and toggling are plain functions so they test without a browser;
//! only `load`/`save` touch the storage itself, and outside the `web` build
//! they degrade to an absent store.

/// localStorage key holding the encoded favorites set.
pub const STORAGE_KEY: &str = "favorites";

/// Decodes a stored favorites entry. An unreadable entry is logged and
/// treated as the empty set.
pub fn decode_ids(raw: &str) -> Vec<i64> {
    match serde_json::from_str(raw) {
        Ok(ids) => ids,
        Err(err) => {
            tracing::warn!("discarding unreadable favorites entry: {err}");
            Vec::new()
        }
    }
}

/// Encodes a favorites set for storage.
pub fn encode_ids(ids: &[i64]) -> String {
    serde_json::to_string(ids).unwrap_or_else(|_| String::from("[]"))
}

/// Toggles membership: removes every occurrence of `id` if present,
/// otherwise appends it. Never introduces a duplicate.
pub fn toggle_id(mut ids: Vec<i64>, id: i64) -> Vec<i64> {
    let len_before = ids.len();
    ids.retain(|&existing| existing != id);
    if ids.len() == len_before {
        ids.push(id);
    }
    ids
}

#[cfg(feature = "web")]
fn read_raw() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()?
}

/// Reads the persisted favorites set. Absent or unreadable storage yields
/// the empty set.
#[cfg(feature = "web")]
pub fn load() -> Vec<i64> {
    match read_raw() {
        Some(raw) => decode_ids(&raw),
        None => Vec::new(),
    }
}

/// Writes the favorites set back to storage. A write failure is logged; the
/// in-memory state is still the source of truth for the session.
#[cfg(feature = "web")]
pub fn save(ids: &[i64]) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(STORAGE_KEY, &encode_ids(ids)).is_err() {
                tracing::warn!("failed to persist favorites");
            }
        }
    }
}

#[cfg(not(feature = "web"))]
pub fn load() -> Vec<i64> {
    Vec::new()
}

#[cfg(not(feature = "web"))]
pub fn save(_ids: &[i64]) {}
