//! This file defines the routes for displaying the log-in page and handling log-in requests.
//! The auth module handles the lower level authentication and cookie auth logic.

use axum::{
    Form,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};
use maud::{Markup, html};
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::{
    AppState, Error,
    alert::Alert,
    auth::{Credentials, normalize_redirect_url, set_auth_cookie},
    context::RequestContext,
    endpoints,
    flash::{redirect_with_alert, set_flash},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base, card_with_logo, link,
    },
};

fn log_in_form(username: &str, redirect_url: Option<&str>) -> Markup {
    html! {
        form method="post" action=(endpoints::LOG_IN) class="space-y-4 md:space-y-6"
        {
            @if let Some(redirect_url) = redirect_url {
                input type="hidden" name="redirect_url" value=(redirect_url);
            }

            div
            {
                label for="username" class=(FORM_LABEL_STYLE) { "Username" }
                input
                    type="text"
                    name="username"
                    id="username"
                    value=(username)
                    autocomplete="username"
                    required
                    autofocus
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="password" class=(FORM_LABEL_STYLE) { "Password" }
                input
                    type="password"
                    name="password"
                    id="password"
                    autocomplete="current-password"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" id="submit-button" class=(BUTTON_PRIMARY_STYLE) { "Log in" }

            p class="text-sm font-light text-gray-500 dark:text-gray-400"
            {
                "New here? Read " (link(endpoints::ABOUT, "about Penny")) "."
            }
        }
    }
}

fn log_in_view(context: RequestContext, username: &str, redirect_url: Option<&str>) -> Markup {
    let form = log_in_form(username, redirect_url);
    let content = html! {
        div class="flex flex-col items-center pt-8"
        {
            @if let Some(alert) = context.alert {
                (alert.into_html())
            }

            (card_with_logo("Log in to your account", &form))
        }
    };

    base("Log In", &[], &content)
}

fn parse_redirect_url(raw_url: Option<&str>, source: &str) -> Option<String> {
    match raw_url.and_then(normalize_redirect_url) {
        Some(redirect_url) => Some(redirect_url),
        None => {
            if let Some(redirect_url) = raw_url {
                tracing::warn!("Invalid redirect URL from {source}: {redirect_url}");
            }
            None
        }
    }
}

#[derive(Deserialize)]
pub struct RedirectQuery {
    pub redirect_url: Option<String>,
}

/// Display the log-in page.
pub async fn get_log_in_page(
    jar: PrivateCookieJar,
    Query(query): Query<RedirectQuery>,
) -> Response {
    let (jar, context) = RequestContext::from_jar(jar);
    let redirect_url = parse_redirect_url(query.redirect_url.as_deref(), "log-in query");

    (jar, log_in_view(context, "", redirect_url.as_deref())).into_response()
}

/// The state needed to perform a login.
#[derive(Debug, Clone)]
pub struct LoginState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,
    /// The duration for which cookies used for authentication are valid.
    pub cookie_duration: Duration,
    /// The only account allowed to log in.
    pub credentials: Credentials,
}

impl FromRef<AppState> for LoginState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            cookie_key: state.cookie_key.clone(),
            cookie_duration: state.cookie_duration,
            credentials: state.credentials.clone(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<LoginState> for Key {
    fn from_ref(state: &LoginState) -> Self {
        state.cookie_key.clone()
    }
}

/// The raw data entered by the user in the log-in form.
#[derive(Clone, Serialize, Deserialize)]
pub struct LogInData {
    pub username: String,
    pub password: String,
    /// Optional URL to redirect to after logging in.
    pub redirect_url: Option<String>,
}

/// Handler for log-in requests via the POST method.
///
/// On success the auth cookie is set and the client is redirected to the page
/// they originally asked for, or the home page. Invalid credentials render the
/// log-in page again with an error alert.
pub async fn post_log_in(
    State(state): State<LoginState>,
    jar: PrivateCookieJar,
    Form(user_data): Form<LogInData>,
) -> Response {
    let redirect_url = parse_redirect_url(user_data.redirect_url.as_deref(), "log-in form");

    if !state
        .credentials
        .matches(&user_data.username, &user_data.password)
    {
        tracing::info!("Failed log-in attempt for user \"{}\"", user_data.username);
        let (jar, context) = RequestContext::from_jar(jar);
        let context = context.with_alert(Error::InvalidCredentials.into_alert());

        return (
            jar,
            log_in_view(context, &user_data.username, redirect_url.as_deref()),
        )
            .into_response();
    }

    let redirect_url = redirect_url.as_deref().unwrap_or(endpoints::ROOT);

    match set_auth_cookie(jar.clone(), &user_data.username, state.cookie_duration) {
        Ok(jar) => {
            let alert = Alert::SuccessSimple {
                message: "Login successful!".to_owned(),
            };

            (set_flash(jar, &alert), Redirect::to(redirect_url)).into_response()
        }
        Err(error) => {
            tracing::error!("Error setting auth cookie: {error}");
            redirect_with_alert(jar, endpoints::LOG_IN, error.into_alert())
        }
    }
}

#[cfg(test)]
mod log_in_tests {
    use axum::{
        Form,
        extract::{Query, State},
        http::{StatusCode, header::CONTENT_TYPE},
    };
    use axum_extra::extract::PrivateCookieJar;
    use scraper::Selector;

    use crate::{
        app_state::create_cookie_key,
        auth::{Credentials, DEFAULT_COOKIE_DURATION, get_token_from_cookies},
        endpoints,
        test_utils::{
            assert_form_input, assert_form_submit_button_with_text, assert_valid_html,
            get_header, must_get_form, parse_html_document, response_cookie_jar,
        },
    };

    use super::{LogInData, LoginState, RedirectQuery, get_log_in_page, post_log_in};

    fn get_state() -> LoginState {
        LoginState {
            cookie_key: create_cookie_key("log in tests"),
            cookie_duration: DEFAULT_COOKIE_DURATION,
            credentials: Credentials::default(),
        }
    }

    fn get_jar(state: &LoginState) -> PrivateCookieJar {
        PrivateCookieJar::new(state.cookie_key.clone())
    }

    fn log_in_data(username: &str, password: &str, redirect_url: Option<&str>) -> LogInData {
        LogInData {
            username: username.to_owned(),
            password: password.to_owned(),
            redirect_url: redirect_url.map(str::to_owned),
        }
    }

    #[tokio::test]
    async fn log_in_page_displays_form() {
        let state = get_state();

        let response = get_log_in_page(
            get_jar(&state),
            Query(RedirectQuery {
                redirect_url: Some("/reports".to_owned()),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(get_header(&response, CONTENT_TYPE.as_str()).starts_with("text/html"));
        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        let form = must_get_form(&document);
        assert_eq!(form.value().attr("action"), Some(endpoints::LOG_IN));
        assert_form_input(&form, "username", "text");
        assert_form_input(&form, "password", "password");
        assert_form_submit_button_with_text(&form, "Log in");
        let hidden = form
            .select(&Selector::parse("input[name='redirect_url']").unwrap())
            .next()
            .expect("no redirect_url input");
        assert_eq!(hidden.value().attr("value"), Some("/reports"));
    }

    #[tokio::test]
    async fn log_in_succeeds_and_redirects_home() {
        let state = get_state();
        let jar = get_jar(&state);

        let response = post_log_in(
            State(state.clone()),
            jar,
            Form(log_in_data("admin", "password", None)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(get_header(&response, "location"), endpoints::ROOT);
        let jar = response_cookie_jar(&response, state.cookie_key.clone());
        let token = get_token_from_cookies(&jar).unwrap();
        assert_eq!(token.username, "admin");
    }

    #[tokio::test]
    async fn log_in_redirects_to_requested_page() {
        let state = get_state();

        let response = post_log_in(
            State(state.clone()),
            get_jar(&state),
            Form(log_in_data("admin", "password", Some("/reports"))),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(get_header(&response, "location"), "/reports");
    }

    #[tokio::test]
    async fn log_in_ignores_external_redirect() {
        let state = get_state();

        let response = post_log_in(
            State(state.clone()),
            get_jar(&state),
            Form(log_in_data("admin", "password", Some("https://evil.example"))),
        )
        .await;

        assert_eq!(get_header(&response, "location"), endpoints::ROOT);
    }

    #[tokio::test]
    async fn invalid_credentials_show_error() {
        let state = get_state();

        let response = post_log_in(
            State(state.clone()),
            get_jar(&state),
            Form(log_in_data("admin", "wrong", None)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let jar = response_cookie_jar(&response, state.cookie_key.clone());
        assert!(get_token_from_cookies(&jar).is_err());
        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        let alert = document
            .select(&Selector::parse("#alert").unwrap())
            .next()
            .expect("no alert");
        assert_eq!(alert.text().collect::<String>().trim(), "Invalid credentials!");
    }
}
