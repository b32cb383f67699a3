use stockdesk_shared::{SessionProvider, SessionUser};
use web_sys::Storage;

const USER_KEY: &str = "user";
const TOKEN_KEY: &str = "token";

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|win| win.local_storage().ok().flatten())
}

fn read(key: &str) -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(key).ok().flatten())
        .filter(|value| !value.trim().is_empty())
}

/// Session written to `localStorage` by the login flow.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalStorageSession;

impl SessionProvider for LocalStorageSession {
    fn user(&self) -> Option<SessionUser> {
        let raw = read(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                web_sys::console::error_1(&format!("Invalid stored user record: {}", e).into());
                None
            },
        }
    }

    fn token(&self) -> Option<String> {
        read(TOKEN_KEY)
    }
}
