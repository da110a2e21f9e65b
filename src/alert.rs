//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered at the top of a page. Handlers that redirect store the
//! alert in a flash cookie (see [crate::flash]) so the next page can show it.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};

/// A message for the user, styled by how it should be interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Alert {
    /// An operation completed, with extra details.
    Success { message: String, details: String },
    /// An operation completed.
    SuccessSimple { message: String },
    /// An operation failed, with extra details explaining how to fix it.
    Error { message: String, details: String },
    /// An operation failed.
    ErrorSimple { message: String },
    /// An operation completed but the user should double check the result.
    Warning { message: String },
    /// Neutral information, e.g. that the user has logged out.
    Info { message: String },
}

impl Alert {
    /// The headline of the alert.
    pub fn message(&self) -> &str {
        match self {
            Alert::Success { message, .. }
            | Alert::SuccessSimple { message }
            | Alert::Error { message, .. }
            | Alert::ErrorSimple { message }
            | Alert::Warning { message }
            | Alert::Info { message } => message,
        }
    }

    fn details(&self) -> Option<&str> {
        match self {
            Alert::Success { details, .. } | Alert::Error { details, .. } => Some(details),
            _ => None,
        }
    }

    fn style(&self) -> &'static str {
        match self {
            Alert::Success { .. } | Alert::SuccessSimple { .. } => {
                "text-green-800 border-green-300 bg-green-50 \
                dark:bg-gray-800 dark:text-green-400 dark:border-green-800"
            }
            Alert::Error { .. } | Alert::ErrorSimple { .. } => {
                "text-red-800 border-red-300 bg-red-50 \
                dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
            }
            Alert::Warning { .. } => {
                "text-yellow-800 border-yellow-300 bg-yellow-50 \
                dark:bg-gray-800 dark:text-yellow-300 dark:border-yellow-800"
            }
            Alert::Info { .. } => {
                "text-blue-800 border-blue-300 bg-blue-50 \
                dark:bg-gray-800 dark:text-blue-400 dark:border-blue-800"
            }
        }
    }

    fn role(&self) -> &'static str {
        match self {
            Alert::Error { .. } | Alert::ErrorSimple { .. } => "alert",
            _ => "status",
        }
    }

    pub fn into_html(self) -> Markup {
        // Template adapted from https://flowbite.com/docs/components/alerts/
        html! {
            div
                id="alert"
                role=(self.role())
                class={ "w-full max-w-md p-4 mb-4 text-sm border rounded-lg " (self.style()) }
            {
                p class="font-medium" { (self.message()) }

                @if let Some(details) = self.details().filter(|details| !details.is_empty()) {
                    p class="mt-1" { (details) }
                }
            }
        }
    }
}
