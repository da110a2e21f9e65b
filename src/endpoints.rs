//! The paths of every route in the app.
//!
//! Paths with a `{transaction_id}` parameter must be filled in with
//! [format_endpoint] before being used in links.

pub const ROOT: &str = "/";
/// Alias of [ROOT].
pub const HOME: &str = "/home";
pub const ABOUT: &str = "/about";
pub const REPORTS: &str = "/reports";
pub const EXPORT_CSV: &str = "/export-csv";

pub const NEW_TRANSACTION: &str = "/add";
pub const EDIT_TRANSACTION: &str = "/edit/{transaction_id}";
pub const DELETE_TRANSACTION: &str = "/delete/{transaction_id}";

pub const LOG_IN: &str = "/login";
pub const LOG_OUT: &str = "/logout";

pub const STATIC: &str = "/static";

/// Replace the first path parameter in `endpoint_path` with `id`.
///
/// The ID is percent-encoded so that any string is a valid path segment.
/// Paths without a parameter are returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        encode_path_segment(id),
        &endpoint_path[param_end..]
    )
}

fn encode_path_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());

    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }

    encoded
}
