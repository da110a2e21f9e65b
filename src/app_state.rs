//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};
use time::Duration;

use crate::{
    auth::{Credentials, DEFAULT_COOKIE_DURATION},
    store::{SharedStore, TransactionStore},
};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,

    /// The duration for which cookies used for authentication are valid.
    pub cookie_duration: Duration,

    /// The only account allowed to log in.
    pub credentials: Credentials,

    /// The JSON file holding every transaction.
    pub store: SharedStore,
}

impl AppState {
    /// Create a new [AppState] around `store`.
    ///
    /// The cookie key is derived from `cookie_secret`, so sessions survive a
    /// restart as long as the secret does not change.
    pub fn new(store: TransactionStore, cookie_secret: &str, credentials: Credentials) -> Self {
        Self {
            cookie_key: create_cookie_key(cookie_secret),
            cookie_duration: DEFAULT_COOKIE_DURATION,
            credentials,
            store: Arc::new(Mutex::new(store)),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Create a signing key for cookies from a `secret`s string.
pub fn create_cookie_key(secret: &str) -> Key {
    let hash = Sha512::digest(secret);

    Key::from(&hash)
}
