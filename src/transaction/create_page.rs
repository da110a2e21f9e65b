//! Defines the route handler for the page for creating a new transaction.

use axum::response::{IntoResponse, Response};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};
use time::OffsetDateTime;

use crate::{
    context::RequestContext,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, page},
    transaction::{
        TransactionType,
        form::{TransactionFormDefaults, transaction_form_fields},
    },
};

fn create_transaction_view(context: RequestContext, today: &str) -> Markup {
    let defaults = TransactionFormDefaults {
        type_: TransactionType::Expense,
        amount: None,
        date: today,
        description: "",
    };

    let content = html! {
        div class=(FORM_CONTAINER_STYLE)
        {
            form
                method="post"
                action=(endpoints::NEW_TRANSACTION)
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "New Transaction" }

                (transaction_form_fields(&defaults))

                button type="submit" id="submit-button" class=(BUTTON_PRIMARY_STYLE)
                {
                    "Create Transaction"
                }
            }
        }
    };

    page("Add Transaction", endpoints::NEW_TRANSACTION, context, &[], &content)
}

/// Renders the page for creating a transaction, with the date set to today (UTC).
pub async fn get_create_transaction_page(jar: PrivateCookieJar) -> Response {
    let (jar, context) = RequestContext::from_jar(jar);
    let today = OffsetDateTime::now_utc().date().to_string();

    (jar, create_transaction_view(context, &today)).into_response()
}
