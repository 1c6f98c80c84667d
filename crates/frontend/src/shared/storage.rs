//! localStorage helpers
//!
//! Browser storage may be missing (private mode, disabled cookies) or full.
//! Every helper degrades to "nothing stored" instead of failing.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read and deserialize a JSON value
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_local_storage()?.get_item(key).ok()??;
    match serde_json::from_str::<T>(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("localStorage[{}] is not valid JSON: {}", key, e);
            None
        }
    }
}

/// Serialize and save a JSON value
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            log::error!("Failed to serialize localStorage[{}]: {}", key, e);
            return;
        }
    };
    if storage.set_item(key, &raw).is_err() {
        log::warn!("localStorage[{}] write rejected", key);
    }
}
