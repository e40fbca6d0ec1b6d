//! Session
//!
//! The auth token and user record, persisted in `localStorage` and mirrored
//! into signals. Writes from this tab update the signals directly; writes
//! from other tabs arrive through the window `storage` event.

use leptos::logging::warn;
use leptos::*;

use super::journal::User;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Reactive view of the stored session
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
    user: RwSignal<Option<User>>,
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

/// A stored empty token counts as signed out
pub fn present_token(raw: Option<String>) -> Option<String> {
    raw.filter(|token| !token.is_empty())
}

fn stored_token() -> Option<String> {
    present_token(get_item(TOKEN_KEY))
}

/// Decode the stored user record; malformed JSON reads as signed out
pub fn parse_user(raw: Option<&str>) -> Option<User> {
    let raw = raw?;
    match serde_json::from_str(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            warn!("Ignoring malformed user record: {}", e);
            None
        }
    }
}

/// Whether a `storage` event touches the session; `None` means cleared
pub fn is_session_key(key: Option<&str>) -> bool {
    match key {
        None => true,
        Some(key) => key == TOKEN_KEY || key == USER_KEY,
    }
}

impl Session {
    fn load() -> Self {
        Self {
            token: create_rw_signal(stored_token()),
            user: create_rw_signal(parse_user(get_item(USER_KEY).as_deref())),
        }
    }

    /// Re-read both keys from storage
    pub fn reload(&self) {
        self.token.set(stored_token());
        self.user.set(parse_user(get_item(USER_KEY).as_deref()));
    }

    /// Current token without subscribing
    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    pub fn user_name(&self) -> Signal<Option<String>> {
        let user = self.user;
        Signal::derive(move || user.with(|u| u.as_ref().map(|u| u.name.clone())))
    }

    /// Persist a new session
    ///
    /// The signals only change once both keys are stored.
    pub fn write(&self, token: &str, user: &User) -> Result<(), String> {
        let user_json = serde_json::to_string(user).map_err(|e| e.to_string())?;
        let storage = local_storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        let stored = storage
            .set_item(TOKEN_KEY, token)
            .and_then(|_| storage.set_item(USER_KEY, &user_json));
        if let Err(e) = stored {
            warn!("Failed to store session: {:?}", e);
            return Err("Could not save your session".to_string());
        }
        self.token.set(present_token(Some(token.to_string())));
        self.user.set(Some(user.clone()));
        Ok(())
    }

    /// Remove both keys
    ///
    /// The signals are cleared even when storage refuses, so this tab signs
    /// out regardless.
    pub fn clear(&self) {
        match local_storage() {
            Some(storage) => {
                for key in [TOKEN_KEY, USER_KEY] {
                    if let Err(e) = storage.remove_item(key) {
                        warn!("Failed to remove {} from storage: {:?}", key, e);
                    }
                }
            }
            None => warn!("localStorage unavailable, clearing in-memory session only"),
        }
        self.token.set(None);
        self.user.set(None);
    }
}

/// Load the session, provide it as context and follow other tabs
pub fn provide_session() -> Session {
    let session = Session::load();
    provide_context(session);

    let handle = window_event_listener(ev::storage, move |event| {
        if is_session_key(event.key().as_deref()) {
            session.reload();
        }
    });
    on_cleanup(move || handle.remove());

    session
}

pub fn use_session() -> Session {
    expect_context::<Session>()
}
