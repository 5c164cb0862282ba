//! Session Storage Commands
//!
//! Persists the session in `localStorage` so a reload keeps the user signed in.

use budget_core::session::STORAGE_KEY;
use budget_core::Session;
use web_sys::Storage;

use super::js_error;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Restore the persisted session, or a signed-out one
pub fn load_session() -> Session {
    local_storage()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
        .map(|raw| Session::from_json(&raw))
        .unwrap_or_default()
}

pub fn save_session(session: &Session) {
    let (Some(storage), Some(raw)) = (local_storage(), session.to_json()) else {
        return;
    };
    if let Err(e) = storage.set_item(STORAGE_KEY, &raw) {
        log::warn!("[session] Failed to persist session: {}", js_error(e));
    }
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.remove_item(STORAGE_KEY) {
            log::warn!("[session] Failed to clear session: {}", js_error(e));
        }
    }
}
