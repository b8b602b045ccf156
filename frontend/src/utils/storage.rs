//! Session storage. Backed by `localStorage` in the browser; host builds
//! (SSR component tests) use an in-memory map with the same surface so the
//! forced-logout and expiry paths can be asserted natively.

/// Plaintext JWT for the current session.
pub const TOKEN_KEY: &str = "token";
/// Cached profile JSON for the signed-in user.
pub const USER_KEY: &str = "user";

pub fn get_item(key: &str) -> Option<String> {
    backend::get(key)
}

pub fn set_item(key: &str, value: &str) -> Result<(), String> {
    backend::set(key, value)
}

pub fn remove_item(key: &str) {
    backend::remove(key);
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use web_sys::Storage;

    fn local_storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub fn get(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    pub fn set(key: &str, value: &str) -> Result<(), String> {
        local_storage()
            .ok_or_else(|| "No localStorage".to_string())?
            .set_item(key, value)
            .map_err(|_| "Failed to write localStorage".to_string())
    }

    pub fn remove(key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::collections::HashMap;
    use std::sync::{Mutex, OnceLock};

    fn map() -> &'static Mutex<HashMap<String, String>> {
        static MAP: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
        MAP.get_or_init(|| Mutex::new(HashMap::new()))
    }

    pub fn get(key: &str) -> Option<String> {
        map()
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    pub fn set(key: &str, value: &str) -> Result<(), String> {
        map()
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    pub fn remove(key: &str) {
        map()
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
    }
}

/// Storage is process-global on the host, so tests that mutate it take this
/// lock to keep parallel test threads from interleaving.
#[cfg(all(test, not(target_arch = "wasm32")))]
pub fn test_guard() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let _guard = test_guard();
        set_item("storage-test", "value").unwrap();
        assert_eq!(get_item("storage-test").as_deref(), Some("value"));
        remove_item("storage-test");
        assert!(get_item("storage-test").is_none());
    }
}
