//! Per-request page context: whether the visitor is logged in and any pending alert.

use axum_extra::extract::PrivateCookieJar;

use crate::{alert::Alert, auth::get_token_from_cookies, flash::take_flash};

/// What every rendered page needs to know about the current request.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RequestContext {
    pub is_logged_in: bool,
    pub alert: Option<Alert>,
}

impl RequestContext {
    /// Build the context from the request cookies, consuming the pending flash alert.
    ///
    /// The returned jar must be included in the response so the flash cookie
    /// is cleared on the client.
    pub fn from_jar(jar: PrivateCookieJar) -> (PrivateCookieJar, Self) {
        let is_logged_in = get_token_from_cookies(&jar).is_ok();
        let (jar, alert) = take_flash(jar);

        (
            jar,
            Self {
                is_logged_in,
                alert,
            },
        )
    }

    /// Show `alert` on this page instead of any flashed alert.
    pub fn with_alert(mut self, alert: Alert) -> Self {
        self.alert = Some(alert);
        self
    }
}

#[cfg(test)]
mod tests {
    use axum_extra::extract::PrivateCookieJar;

    use crate::{
        alert::Alert,
        app_state::create_cookie_key,
        auth::{DEFAULT_COOKIE_DURATION, set_auth_cookie},
        context::RequestContext,
        flash::set_flash,
    };

    fn get_jar() -> PrivateCookieJar {
        PrivateCookieJar::new(create_cookie_key("context tests"))
    }

    #[test]
    fn anonymous_request_without_alert() {
        let (_, context) = RequestContext::from_jar(get_jar());

        assert_eq!(context, RequestContext::default());
    }

    #[test]
    fn logged_in_request_with_alert() {
        let alert = Alert::Info {
            message: "You have been logged out.".to_owned(),
        };
        let jar = set_auth_cookie(get_jar(), "admin", DEFAULT_COOKIE_DURATION).unwrap();
        let jar = set_flash(jar, &alert);

        let (_, context) = RequestContext::from_jar(jar);

        assert!(context.is_logged_in);
        assert_eq!(context.alert, Some(alert));
    }
}
