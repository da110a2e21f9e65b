use axum::{
    body::Body,
    http::{
        HeaderMap, HeaderValue, StatusCode,
        header::{COOKIE, SET_COOKIE},
    },
    response::Response,
};
use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, Key},
};
use time::Duration;

#[track_caller]
pub(crate) fn get_header(response: &Response<Body>, header_name: &str) -> String {
    let header_error_message = format!("Headers missing {header_name}");

    response
        .headers()
        .get(header_name)
        .expect(&header_error_message)
        .to_str()
        .expect("Could not convert to str")
        .to_string()
}

#[track_caller]
pub(crate) fn assert_redirect(response: &Response<Body>, want_location: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(get_header(response, "location"), want_location);
}

/// The cookies a browser would send after receiving `response`.
///
/// Cookies that the response deletes are left out.
pub(crate) fn response_cookie_jar(response: &Response<Body>, key: Key) -> PrivateCookieJar {
    let cookie_header = response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|header| Cookie::parse(header.to_str().ok()?.to_owned()).ok())
        .filter(|cookie| cookie.max_age() != Some(Duration::ZERO))
        .map(|cookie| format!("{}={}", cookie.name(), cookie.value()))
        .collect::<Vec<_>>()
        .join("; ");

    let mut headers = HeaderMap::new();
    if !cookie_header.is_empty() {
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&cookie_header).expect("Invalid cookie header"),
        );
    }

    PrivateCookieJar::from_headers(&headers, key)
}
