//! Defines the route handler for the page for editing an existing transaction.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use maud::{Markup, html};

use crate::{
    Error,
    context::RequestContext,
    endpoints::{self, format_endpoint},
    flash::redirect_with_alert,
    html::{BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, link, page},
    store::{StoreState, lock_store},
    transaction::{
        Transaction, TransactionId, find_transaction,
        form::{TransactionFormDefaults, transaction_form_fields},
    },
};

fn edit_transaction_view(context: RequestContext, transaction: &Transaction) -> Markup {
    let edit_url = format_endpoint(endpoints::EDIT_TRANSACTION, &transaction.id);

    let content = html! {
        div class=(FORM_CONTAINER_STYLE)
        {
            form method="post" action=(edit_url) class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "Edit Transaction" }

                (transaction_form_fields(&TransactionFormDefaults::from(transaction)))

                button type="submit" id="submit-button" class=(BUTTON_PRIMARY_STYLE)
                {
                    "Update Transaction"
                }

                p class="text-sm text-center" { (link(endpoints::ROOT, "Cancel")) }
            }
        }
    };

    page("Edit Transaction", &edit_url, context, &[], &content)
}

/// Renders the form pre-filled with the transaction's current values.
///
/// An unknown ID sends the user back to the transactions page with an alert.
pub async fn get_edit_transaction_page(
    State(state): State<StoreState>,
    Path(transaction_id): Path<TransactionId>,
    jar: PrivateCookieJar,
) -> Response {
    let transaction = lock_store(&state.store)
        .and_then(|store| store.load())
        .and_then(|transactions| {
            find_transaction(&transactions, &transaction_id)
                .cloned()
                .ok_or_else(|| Error::TransactionNotFound(transaction_id.clone()))
        });

    match transaction {
        Ok(transaction) => {
            let (jar, context) = RequestContext::from_jar(jar);
            (jar, edit_transaction_view(context, &transaction)).into_response()
        }
        Err(error) => {
            tracing::error!("Could not open the edit page for {transaction_id}: {error}");
            redirect_with_alert(jar, endpoints::ROOT, error.into_alert())
        }
    }
}
