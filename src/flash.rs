//! One-shot alerts that survive a redirect.
//!
//! A handler that redirects stores an [Alert] in an encrypted cookie. The next
//! page that renders takes the alert out of the cookie and shows it once.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use time::{Duration, OffsetDateTime};

use crate::alert::Alert;

pub(crate) const COOKIE_FLASH: &str = "flash";

/// Store `alert` in the flash cookie, replacing any pending alert.
///
/// If the alert cannot be serialized it is logged and dropped.
pub fn set_flash(jar: PrivateCookieJar, alert: &Alert) -> PrivateCookieJar {
    let value = match serde_json::to_string(alert) {
        Ok(value) => value,
        Err(error) => {
            tracing::error!("Could not serialize flash alert {alert:?}: {error}");
            return jar;
        }
    };

    jar.add(
        Cookie::build((COOKIE_FLASH, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Remove the pending alert from `jar`, if there is one.
///
/// A flash cookie that cannot be decoded is discarded.
pub fn take_flash(jar: PrivateCookieJar) -> (PrivateCookieJar, Option<Alert>) {
    let Some(cookie) = jar.get(COOKIE_FLASH) else {
        return (jar, None);
    };

    let alert = match serde_json::from_str(cookie.value_trimmed()) {
        Ok(alert) => Some(alert),
        Err(error) => {
            tracing::warn!("Discarding invalid flash cookie: {error}");
            None
        }
    };

    let jar = jar.add(
        Cookie::build((COOKIE_FLASH, "deleted"))
            .path("/")
            .expires(OffsetDateTime::UNIX_EPOCH)
            .max_age(Duration::ZERO)
            .http_only(true)
            .same_site(SameSite::Lax),
    );

    (jar, alert)
}

/// Redirect to `url` and show `alert` on the page that is loaded next.
pub fn redirect_with_alert(jar: PrivateCookieJar, url: &str, alert: Alert) -> Response {
    (set_flash(jar, &alert), Redirect::to(url)).into_response()
}
